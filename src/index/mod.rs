// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index construction: the data structures that make lookup fast.
//!
//! - **Trie**: vocabulary words, for prefix suggestions and substring spellcheck
//! - **Inverted index**: token prefix → documents
//! - **Ranked completion index**: AVL tree of word frequencies, for top-K autocomplete
//! - **Vocabulary**: the word list all of the above are seeded from
//!
//! [`SearchIndex`] bundles one of each, and [`IndexHandle`] swaps whole
//! snapshots in and out.

mod avl;
mod inverted;
mod shared;
pub(crate) mod trie;
mod vocabulary;

pub use avl::*;
pub use inverted::*;
pub use shared::*;
pub use trie::Trie;
pub use vocabulary::*;
