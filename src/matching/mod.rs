// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Exact substring matching.
//!
//! Two questions, two algorithms. Boyer-Moore counts how many times a term
//! appears (page ranking). KMP answers whether it appears at all (the gate in
//! front of search-frequency counters). Both work on bytes and are
//! case-sensitive.

mod boyer_moore;
pub mod kmp;

pub use boyer_moore::{count_occurrences, StringMatcher};
pub use kmp::{exists, failure_table};
