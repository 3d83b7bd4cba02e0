// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-memory lexical search and ranking for a laptop catalog.
//!
//! A handful of from-scratch text structures, each answering one kind of
//! question about the catalog:
//!
//! | Question                                   | Structure                     |
//! |--------------------------------------------|-------------------------------|
//! | Which words start with / contain this?     | [`Trie`]                      |
//! | Which documents have a word with prefix?   | [`InvertedIndex`]             |
//! | What are the most frequent completions?    | [`RankedCompletionIndex`]     |
//! | Which names are close to this typo?        | [`FuzzyMatcher`]              |
//! | Which page mentions this term the most?    | [`PageRanker`]                |
//! | Should this search be counted?             | [`SearchFrequencyTracker`]    |
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────┐   ┌────────────┐   ┌──────────────────────┐
//! │ DocumentSource │──▶│ Vocabulary │──▶│ Trie, AVL, Inverted  │
//! └────────────────┘   └────────────┘   └──────────────────────┘
//!         │                                        │
//!         ▼                                        ▼
//! ┌────────────────┐   ┌────────────┐   ┌──────────────────────┐
//! │  FuzzyMatcher  │   │ PageRanker │   │     SearchEngine     │
//! │ (Levenshtein)  │   │(BoyerMoore)│   │  (IndexHandle swap)  │
//! └────────────────┘   └────────────┘   └──────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use lapdex::{EngineConfig, InMemorySource, SearchEngine};
//! use lapdex::testing::make_doc;
//!
//! let source = InMemorySource::new(vec![
//!     make_doc(1, "HP", "ProBook 450"),
//!     make_doc(2, "Lenovo", "ThinkPad T14"),
//! ]);
//! let engine = SearchEngine::new(source, EngineConfig::default()).unwrap();
//!
//! let hits = engine.search("probok");
//! assert_eq!(hits[0].product_name, "ProBook 450");
//! ```

pub mod config;
pub mod error;
pub mod frequency;
pub mod fuzzy;
pub mod index;
pub mod logging;
pub mod matching;
pub mod scoring;
pub mod search;
pub mod source;
pub mod testing;
mod types;
pub mod utils;

pub use config::EngineConfig;
pub use error::{EngineError, Result};
pub use frequency::{CounterStore, InMemoryCounterStore, SearchCounter, SearchFrequencyTracker};
pub use fuzzy::{distance_within, edit_distance, levenshtein_within, max_edit_distance_for, FuzzyMatcher};
pub use index::{
    IndexHandle, InvertedIndex, RankedCompletionIndex, SearchIndex, Trie, Vocabulary,
};
pub use matching::{count_occurrences, StringMatcher};
pub use scoring::{MaxHeap, PageRanker};
pub use search::SearchEngine;
pub use source::{DocumentSource, InMemorySource};
pub use types::{
    DocId, Document, Field, MatchCandidate, MatchKind, PageRank, VocabularyEntry,
};
pub use utils::{normalize, normalize_term, to_token, tokenize};
