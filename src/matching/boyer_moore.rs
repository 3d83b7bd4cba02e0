// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Occurrence counting with the Boyer-Moore bad-character rule.
//!
//! The pattern is compiled once into a 256-entry table holding the last index
//! of each byte in the pattern (-1 when absent). Each window is compared
//! right to left:
//!
//! - **Mismatch at `j`**: slide so the mismatched text byte lines up with its
//!   last occurrence in the pattern, `max(1, j - last[text[s + j]])`.
//! - **Full match**: count it, then slide by `m - last[text[s + m]]`, or by 1
//!   when the window already touches the end of the text.
//!
//! The post-match shift never skips an occurrence. An occurrence at `s + d`
//! with `d < m - last[c]` would need `pattern[m - d] == c` at an index past
//! the last `c`, which is impossible. So overlapping occurrences are all
//! counted: "aa" occurs twice in "aaa".
//!
//! Matching works on bytes. A valid UTF-8 pattern can only match a valid
//! UTF-8 text at character boundaries, so byte offsets never split a
//! character. Matching is case-sensitive; callers lowercase both sides.

use crate::error::{EngineError, Result};

/// A compiled pattern that counts its occurrences in any text.
#[derive(Debug, Clone)]
pub struct StringMatcher {
    pattern: String,
    last_occurrence: [isize; 256],
}

impl StringMatcher {
    /// Compile `pattern`. Empty patterns are rejected.
    pub fn new(pattern: &str) -> Result<Self> {
        if pattern.is_empty() {
            return Err(EngineError::EmptyPattern);
        }

        let mut last_occurrence = [-1isize; 256];
        for (i, &byte) in pattern.as_bytes().iter().enumerate() {
            last_occurrence[byte as usize] = i as isize;
        }

        Ok(Self {
            pattern: pattern.to_string(),
            last_occurrence,
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    #[inline]
    fn last(&self, byte: u8) -> isize {
        self.last_occurrence[byte as usize]
    }

    /// Number of (possibly overlapping) occurrences of the pattern in `text`.
    pub fn count(&self, text: &str) -> usize {
        let pattern = self.pattern.as_bytes();
        let text = text.as_bytes();
        let m = pattern.len();
        let n = text.len();
        if m > n {
            return 0;
        }

        let mut count = 0;
        let mut shift = 0;

        while shift <= n - m {
            // Compare right to left; `j` ends one past the mismatch
            let mut j = m;
            while j > 0 && pattern[j - 1] == text[shift + j - 1] {
                j -= 1;
            }

            if j == 0 {
                count += 1;
                shift += if shift + m < n {
                    (m as isize - self.last(text[shift + m])) as usize
                } else {
                    1
                };
            } else {
                let mismatch = j - 1;
                let skip = mismatch as isize - self.last(text[shift + mismatch]);
                shift += skip.max(1) as usize;
            }
        }

        count
    }
}

/// One-shot count of `pattern` in `text`.
pub fn count_occurrences(text: &str, pattern: &str) -> Result<usize> {
    Ok(StringMatcher::new(pattern)?.count(text))
}
