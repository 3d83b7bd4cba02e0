// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Substring existence with Knuth-Morris-Pratt.
//!
//! `failure_table(p)[i]` is the length of the longest proper prefix of
//! `p[..=i]` that is also a suffix of it. On a mismatch after `j` matched
//! bytes, the scan falls back to `failure[j - 1]` matched bytes instead of
//! restarting, so the text is read once: O(|text| + |pattern|).
//!
//! This is a yes/no gate. "How many times" is Boyer-Moore's job.

/// Longest-proper-prefix-that-is-also-suffix lengths for each prefix of `pattern`.
pub fn failure_table(pattern: &[u8]) -> Vec<usize> {
    let mut table = vec![0; pattern.len()];
    let mut length = 0;

    for i in 1..pattern.len() {
        while length > 0 && pattern[i] != pattern[length] {
            length = table[length - 1];
        }
        if pattern[i] == pattern[length] {
            length += 1;
        }
        table[i] = length;
    }

    table
}

/// Does `pattern` occur anywhere in `text`?
///
/// An empty pattern answers `false`: there is nothing to gate on.
pub fn exists(text: &str, pattern: &str) -> bool {
    let pattern = pattern.as_bytes();
    let text = text.as_bytes();
    if pattern.is_empty() || pattern.len() > text.len() {
        return false;
    }

    let failure = failure_table(pattern);
    let mut matched = 0;

    for &byte in text {
        while matched > 0 && byte != pattern[matched] {
            matched = failure[matched - 1];
        }
        if byte == pattern[matched] {
            matched += 1;
            if matched == pattern.len() {
                return true;
            }
        }
    }

    false
}
