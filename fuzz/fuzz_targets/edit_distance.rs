// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for edit distance.
//!
//! The bounded version must agree with the full DP for every threshold, and
//! both must respect the length lower bound. Fuzzy search trusts these
//! numbers to decide what the user sees.

#![no_main]

use arbitrary::Arbitrary;
use lapdex::{distance_within, edit_distance};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct DistanceInput {
    query_bytes: Vec<u8>,
    target_bytes: Vec<u8>,
    max: u8,
}

fuzz_target!(|input: DistanceInput| {
    let query = String::from_utf8_lossy(&input.query_bytes);
    let target = String::from_utf8_lossy(&input.target_bytes);

    // Cap lengths to avoid timeouts
    let query: String = query.chars().take(50).collect();
    let target: String = target.chars().take(100).collect();
    let max = usize::from(input.max % 8);

    let full = edit_distance(&query, &target);

    // INVARIANT 1: Symmetric
    assert_eq!(full, edit_distance(&target, &query));

    // INVARIANT 2: Length difference is a lower bound
    let len_diff = query.chars().count().abs_diff(target.chars().count());
    assert!(
        len_diff <= full,
        "distance {} below length difference {} for query='{}', target='{}'",
        full, len_diff, query, target
    );

    // INVARIANT 3: Bounded agrees with full
    let bounded = distance_within(&query, &target, max);
    if full <= max {
        assert_eq!(bounded, Some(full));
    } else {
        assert_eq!(bounded, None);
    }

    // INVARIANT 4: Identity
    assert_eq!(edit_distance(&query, &query), 0);
});
