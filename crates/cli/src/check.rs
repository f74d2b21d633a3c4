// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Check-line extraction from expected-output files.
//!
//! Only lines carrying the check prefix participate in matching; everything
//! else in the expected file is commentary and is ignored.

/// A single check line extracted from the expected file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckLine {
    /// Pattern text with the prefix removed and surrounding whitespace trimmed.
    pub pattern: String,

    /// 1-based line number in the expected file.
    pub line: usize,
}

/// Extract the ordered check-line sequence from expected-file text.
///
/// A line is a check line when its content, after any leading whitespace,
/// starts with `prefix`. The remainder after the prefix is trimmed on both
/// sides. An expected file with no check lines yields an empty sequence,
/// which the matcher treats as vacuous success.
pub fn extract_checks(text: &str, prefix: &str) -> Vec<CheckLine> {
    text.lines()
        .enumerate()
        .filter_map(|(index, raw)| {
            let rest = raw.trim_start().strip_prefix(prefix)?;
            Some(CheckLine {
                pattern: rest.trim().to_string(),
                line: index + 1,
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
