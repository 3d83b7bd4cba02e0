// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy search: typo tolerance via edit distance.
//!
//! Two layers here: plain and bounded Levenshtein for comparing two strings,
//! and a matcher that ranks whole documents against a query using word and
//! n-gram windows.

mod levenshtein;
mod matcher;

pub use levenshtein::*;
pub use matcher::*;
