// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the ranked completion tree.
//!
//! Arbitrary insert sequences must leave the AVL tree balanced and ordered,
//! and top-K answers must be sorted, prefixed, and no longer than K.

#![no_main]

use arbitrary::Arbitrary;
use lapdex::RankedCompletionIndex;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct TreeInput {
    inserts: Vec<(String, u16)>,
    prefix: String,
    k: u8,
}

fuzz_target!(|input: TreeInput| {
    let mut index = RankedCompletionIndex::new();
    for (word, delta) in input.inserts.iter().take(256) {
        index.insert(word, u64::from(*delta));
    }

    // INVARIANT 1: Structure survives every insert order
    assert!(index.is_balanced(), "unbalanced after {} inserts", index.len());
    assert!(index.is_ordered(), "in-order traversal not increasing");

    // INVARIANT 2: Top-K is bounded, prefixed, and ranked
    let k = usize::from(input.k % 16);
    let top = index.top_completions(&input.prefix, k);
    assert!(top.len() <= k);

    let prefix = lapdex::normalize(&input.prefix);
    for entry in &top {
        assert!(entry.word.starts_with(&prefix));
        assert_eq!(index.frequency(&entry.word), Some(entry.frequency));
    }
    for pair in top.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(
            a.frequency > b.frequency || (a.frequency == b.frequency && a.word < b.word),
            "{:?} ranked before {:?}",
            a,
            b
        );
    }
});
