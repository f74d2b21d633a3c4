// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use std::path::PathBuf;

#[test]
fn parses_positional_paths() {
    let cli = Cli::try_parse_from(["outcheck", "run.log", "expected.txt"]).unwrap();
    assert_eq!(cli.actual, PathBuf::from("run.log"));
    assert_eq!(cli.expected, PathBuf::from("expected.txt"));
}

#[test]
fn check_prefix_defaults_to_comment_marker() {
    let cli = Cli::try_parse_from(["outcheck", "run.log", "expected.txt"]).unwrap();
    assert_eq!(cli.check_prefix, DEFAULT_CHECK_PREFIX);
    assert_eq!(cli.check_prefix, "// CHECK: ");
}

#[test]
fn short_flag_overrides_prefix() {
    let cli = Cli::try_parse_from(["outcheck", "run.log", "expected.txt", "-p", "EXPECT: "])
        .unwrap();
    assert_eq!(cli.check_prefix, "EXPECT: ");
}

#[test]
fn long_flag_overrides_prefix() {
    let cli = Cli::try_parse_from([
        "outcheck",
        "run.log",
        "expected.txt",
        "--check-prefix",
        "# OUT: ",
    ])
    .unwrap();
    assert_eq!(cli.check_prefix, "# OUT: ");
}

#[test]
fn both_paths_are_required() {
    assert!(Cli::try_parse_from(["outcheck"]).is_err());
    assert!(Cli::try_parse_from(["outcheck", "run.log"]).is_err());
}
