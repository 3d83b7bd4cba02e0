// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance, full and bounded.
//!
//! `edit_distance` is the textbook Wagner-Fischer DP with a rolling row:
//! O(|a|·|b|) time, O(|b|) space. Distances are measured in characters, not
//! bytes, so "café" and "cafe" are one substitution apart.
//!
//! `distance_within` answers "is it at most `max`, and if so what is it?"
//! with two early exits:
//! 1. `|len(a) - len(b)|` is a lower bound on edit distance. If the lengths
//!    differ by more than `max`, skip the DP entirely.
//! 2. Row minima never decrease from one row to the next. Once every cell in
//!    a row exceeds `max`, no later row can come back under it.
//!
//! Both exits are sound: they never reject a pair whose true distance is
//! within the bound.

/// Levenshtein distance between `a` and `b`.
///
/// The minimum number of single-character insertions, deletions, and
/// substitutions that turn `a` into `b`. Symmetric, zero iff `a == b`, and
/// `edit_distance(a, "") == a.chars().count()`.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let b_len = b_chars.len();

    // Row 0: transforming "" into b[..j] takes j insertions
    let mut row: Vec<usize> = (0..=b_len).collect();

    for (i, ac) in a.chars().enumerate() {
        // `diagonal` holds row[i-1][j-1] as we sweep left to right
        let mut diagonal = row[0];
        row[0] = i + 1;

        for (j, &bc) in b_chars.iter().enumerate() {
            let above = row[j + 1];
            let cost = usize::from(ac != bc);
            row[j + 1] = (above + 1) // deletion
                .min(row[j] + 1) // insertion
                .min(diagonal + cost); // substitution or match
            diagonal = above;
        }
    }

    row[b_len]
}

/// Edit distance if it is at most `max`, otherwise `None`.
pub fn distance_within(a: &str, b: &str, max: usize) -> Option<usize> {
    // Use character counts, not byte lengths, for Unicode correctness
    let a_len = a.chars().count();
    let b_len = b.chars().count();

    // Early-exit: length difference is a lower bound on edit distance
    if a_len.abs_diff(b_len) > max {
        return None;
    }

    let b_chars: Vec<char> = b.chars().collect();
    let mut dp: Vec<usize> = (0..=b_len).collect();

    for (i, ac) in a.chars().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;
        let mut min_row = dp[0];

        for (j, &bc) in b_chars.iter().enumerate() {
            let temp = dp[j + 1];
            let cost = usize::from(ac != bc);
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
            min_row = min_row.min(dp[j + 1]);
        }

        // Early-exit: if minimum in this row exceeds max, no point continuing
        if min_row > max {
            return None;
        }
    }

    let distance = dp[b_len];
    (distance <= max).then_some(distance)
}

/// Are these strings within `max` edits of each other?
#[inline]
pub fn levenshtein_within(a: &str, b: &str, max: usize) -> bool {
    distance_within(a, b, max).is_some()
}
