// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output checker binary entry point.

use clap::Parser;

use outcheck::cli::Cli;
use outcheck::output_diagnostic::print_error;
use outcheck::runner::{self, exit_codes, CheckError};

fn main() {
    let cli = Cli::parse();

    if let Err(err) = runner::run(&cli) {
        print_error(&err);
        let code = match err {
            CheckError::Read { .. } => exit_codes::ERROR,
            CheckError::Unmatched { .. } => exit_codes::CHECK_FAILED,
        };
        std::process::exit(code);
    }
}
