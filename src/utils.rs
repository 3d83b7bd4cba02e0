// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Utility functions for string processing.
//!
//! Three levels of normalization, from loosest to strictest:
//!
//! | Function          | Keeps                       | Used by                        |
//! |-------------------|-----------------------------|--------------------------------|
//! | `normalize_term`  | everything, trimmed         | search-frequency counter keys  |
//! | `normalize`       | everything, whitespace runs | product names, completion keys |
//! | `to_token`        | `a`-`z` only                | trie and inverted index keys   |
//!
//! Characters outside `a`-`z` are dropped at the character level, never
//! escaped, and never abort the surrounding word.

/// Is this character allowed in a stored token?
#[inline]
pub fn is_token_char(c: char) -> bool {
    c.is_ascii_lowercase()
}

/// Normalize a string for search: lowercase and collapse whitespace.
///
/// - "  ProBook   450 " → "probook 450"
/// - "MacBook\tPro" → "macbook pro"
pub fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalize a search term for counter lookups: trim, then lowercase.
pub fn normalize_term(term: &str) -> String {
    term.trim().to_lowercase()
}

/// Reduce a word to its token form: lowercase letters `a`-`z` only.
///
/// - "ThinkPad" → "thinkpad"
/// - "T14s" → "ts"
/// - "café" → "caf"
pub fn to_token(word: &str) -> String {
    word.chars()
        .map(|c| c.to_ascii_lowercase())
        .filter(|&c| is_token_char(c))
        .collect()
}

/// Split text into tokens.
///
/// Words are separated by any non-alphanumeric character, so digits stay
/// attached to their word until `to_token` strips them: "i7-1355U" becomes
/// `["i", "u"]`, "ProBook 450" becomes `["probook"]`. Words that reduce to
/// nothing are discarded.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .map(to_token)
        .filter(|token| !token.is_empty())
        .collect()
}

/// Lowercased whitespace-delimited words, with no character filtering.
///
/// This is the fuzzy matcher's view of a name: "ProBook 450" is two words,
/// `["probook", "450"]`.
pub fn split_words(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}
