// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for Boyer-Moore counting and the KMP gate.
//!
//! Counts are checked against a sliding-window scan, so a bad skip in the
//! bad-character table shows up as a wrong count rather than a silent miss.

#![no_main]

use arbitrary::Arbitrary;
use lapdex::matching::kmp;
use lapdex::StringMatcher;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct CountInput {
    text: String,
    pattern: String,
}

fuzz_target!(|input: CountInput| {
    // Cap lengths to avoid timeouts
    let text: String = input.text.chars().take(512).collect();
    let pattern: String = input.pattern.chars().take(16).collect();
    let (text, pattern) = (text.as_str(), pattern.as_str());

    let Ok(matcher) = StringMatcher::new(pattern) else {
        // Only the empty pattern is rejected
        assert!(pattern.is_empty());
        return;
    };

    let expected = if pattern.len() > text.len() {
        0
    } else {
        text.as_bytes()
            .windows(pattern.len())
            .filter(|window| *window == pattern.as_bytes())
            .count()
    };
    let count = matcher.count(text);

    assert_eq!(
        count, expected,
        "count mismatch for pattern='{}', text='{}'",
        pattern, text
    );
    assert_eq!(kmp::exists(text, pattern), count > 0);
});
