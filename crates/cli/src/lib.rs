// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Order-sensitive output checker for test harnesses.
//!
//! Compares the actual output of a test run against an expected-output
//! file, verifying that every line carrying the check prefix (default
//! `"// CHECK: "`) appears, in order, as a substring of some actual line.
//! Matching is greedy and never backtracks: each check consumes the
//! earliest actual line containing it, and no earlier line is reconsidered
//! for later checks. An expected file with no check lines passes vacuously.

pub mod check;
#[doc(hidden)]
pub mod cli;
pub mod matcher;
#[doc(hidden)]
pub mod output_diagnostic;
pub mod runner;
