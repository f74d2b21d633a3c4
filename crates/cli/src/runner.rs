// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Wires extraction and matching together for one invocation.

use crate::check;
use crate::cli::Cli;
use crate::matcher::{self, MatchFailure, MatchReport};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Process exit codes.
pub mod exit_codes {
    /// Every check line matched, or there were none to match.
    pub const SUCCESS: i32 = 0;
    /// A check line failed to match.
    pub const CHECK_FAILED: i32 = 1;
    /// Fatal fault: unreadable input. clap reports usage errors as 2 as well.
    pub const ERROR: i32 = 2;
}

/// Errors produced by a check run.
#[derive(Debug, Error)]
pub enum CheckError {
    /// An input file could not be read.
    #[error("failed to read {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The first unmatched check line. A normal outcome of a failing check,
    /// not a fault.
    #[error("{}:{}", .path.display(), .failure)]
    Unmatched {
        /// Expected file the failing check line came from.
        path: PathBuf,
        #[source]
        failure: MatchFailure,
    },
}

/// Run one check: load both files, extract the check lines, verify in order.
///
/// The report is informational; the CLI ignores it on success.
pub fn run(cli: &Cli) -> Result<MatchReport, CheckError> {
    let actual_text = read_input(&cli.actual)?;
    let expected_text = read_input(&cli.expected)?;

    let checks = check::extract_checks(&expected_text, &cli.check_prefix);
    let actual_lines: Vec<&str> = actual_text.lines().collect();

    matcher::verify(&checks, &actual_lines).map_err(|failure| CheckError::Unmatched {
        path: cli.expected.clone(),
        failure,
    })
}

fn read_input(path: &Path) -> Result<String, CheckError> {
    std::fs::read_to_string(path).map_err(|source| CheckError::Read {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
