// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Read-mostly index snapshots.
//!
//! A [`SearchIndex`] is built in one go and never mutated afterwards. Readers
//! hold an `Arc` to the snapshot they started with; a rebuild constructs a
//! fresh index off to the side and swaps the pointer. No reader ever sees a
//! half-built trie or tree, and the write lock is held only for the swap.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::info;

use crate::config::EngineConfig;
use crate::index::avl::RankedCompletionIndex;
use crate::index::inverted::InvertedIndex;
use crate::index::trie::Trie;
use crate::index::vocabulary::Vocabulary;
use crate::types::Document;

/// Everything derived from one pass over the document collection.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    pub vocabulary: Vocabulary,
    pub trie: Trie,
    pub completions: RankedCompletionIndex,
    pub inverted: InvertedIndex,
}

impl SearchIndex {
    /// Build every structure from `documents`.
    ///
    /// The configured vocabulary file, if any, is merged into the word
    /// vocabulary; a missing file only costs a warning.
    pub fn build(documents: &[Document], config: &EngineConfig) -> Self {
        let mut vocabulary = Vocabulary::from_documents(documents, &config.index_fields);
        if let Some(path) = &config.vocabulary_path {
            vocabulary.extend(&Vocabulary::load_or_empty(path));
        }

        let mut inverted = InvertedIndex::new();
        for document in documents {
            inverted.index_document(document, &config.index_fields);
        }

        let index = Self {
            trie: vocabulary.to_trie(),
            completions: vocabulary.to_completion_index(),
            inverted,
            vocabulary,
        };

        info!(
            documents = documents.len(),
            words = index.vocabulary.len(),
            trie_words = index.trie.len(),
            "built search index"
        );
        index
    }
}

/// Shared handle to the current [`SearchIndex`] snapshot.
#[derive(Debug, Default)]
pub struct IndexHandle {
    current: RwLock<Arc<SearchIndex>>,
}

impl IndexHandle {
    pub fn new(index: SearchIndex) -> Self {
        Self {
            current: RwLock::new(Arc::new(index)),
        }
    }

    /// The current snapshot. Stays valid across later swaps.
    pub fn snapshot(&self) -> Arc<SearchIndex> {
        Arc::clone(&self.current.read())
    }

    /// Install a new snapshot, returning the one it replaced.
    pub fn swap(&self, index: SearchIndex) -> Arc<SearchIndex> {
        let next = Arc::new(index);
        std::mem::replace(&mut *self.current.write(), next)
    }
}
