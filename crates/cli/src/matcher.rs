// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Greedy in-order matching of check lines against actual output.
//!
//! Each check consumes the earliest actual line at or after the cursor that
//! contains its pattern as a substring, and the cursor never retreats. This
//! deliberately forgoes backtracking: a check sequence that would only be
//! satisfiable by skipping an earlier candidate line fails, and callers are
//! expected to write check lines with leftmost-first consumption in mind.

use crate::check::CheckLine;
use thiserror::Error;

/// Summary of a successful match run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchReport {
    /// Number of check lines matched.
    pub matched: usize,

    /// Index one past the last actual line consumed (0 when no check
    /// consumed anything).
    pub cursor: usize,
}

/// The first unmatched check line, with enough context to diagnose it.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error(
    "{expected_line}: check \"{pattern}\" not found in actual output (searched from actual line {searched_from})"
)]
pub struct MatchFailure {
    /// Pattern text that failed to match.
    pub pattern: String,

    /// 1-based expected-file line the pattern came from.
    pub expected_line: usize,

    /// 1-based actual line the failed search started at.
    pub searched_from: usize,
}

/// Match every check line, in order, against the actual lines.
///
/// Succeeds when each pattern is contained in some actual line at or after
/// the line consumed by the previous pattern. Trailing actual lines beyond
/// the last match are never an error, and an empty check sequence succeeds
/// regardless of the actual content.
pub fn verify(checks: &[CheckLine], actual: &[&str]) -> Result<MatchReport, MatchFailure> {
    let mut cursor = 0;
    for check in checks {
        let found = actual[cursor..]
            .iter()
            .position(|line| line.contains(check.pattern.as_str()));
        match found {
            Some(offset) => cursor += offset + 1,
            None => {
                return Err(MatchFailure {
                    pattern: check.pattern.clone(),
                    expected_line: check.line,
                    searched_from: cursor + 1,
                });
            }
        }
    }
    Ok(MatchReport {
        matched: checks.len(),
        cursor,
    })
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
