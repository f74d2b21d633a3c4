// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing.

use clap::Parser;
use std::path::PathBuf;

/// Default marker identifying check lines in the expected file.
pub const DEFAULT_CHECK_PREFIX: &str = "// CHECK: ";

/// Order-sensitive output checker for test harnesses
#[derive(Parser, Clone, Debug)]
#[command(name = "outcheck", version)]
#[command(about = "Check actual test output against expected check lines")]
pub struct Cli {
    /// Path to a file containing the actual output of a test run
    #[arg(value_name = "ACTUAL")]
    pub actual: PathBuf,

    /// Path to a file containing the expected output of a test run
    #[arg(value_name = "EXPECTED")]
    pub expected: PathBuf,

    /// Only expected-file lines prefixed with this marker are checked
    /// against the actual output
    #[arg(
        short = 'p',
        long = "check-prefix",
        value_name = "PREFIX",
        default_value = DEFAULT_CHECK_PREFIX
    )]
    pub check_prefix: String,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
