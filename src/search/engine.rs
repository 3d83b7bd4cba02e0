// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search pipeline over a document source.
//!
//! ```text
//! search("probok")
//!   ├─ exact:  product names containing "probok"       (KMP gate)
//!   └─ fuzzy:  nothing exact? rank every product name by edit distance
//!
//! full_search("thinkpad len")
//!   1. candidates = search(...)
//!   2. inverted index over candidates' product + brand tokens, keyed by position
//!   3. keep candidates where every query token prefix-matches some token
//! ```
//!
//! Vocabulary lookups (`suggest`, `spellcheck`, `complete`) read the current
//! [`SearchIndex`] snapshot. `rebuild` builds a new one and swaps it in;
//! `update_source` edits the documents first, so the source and the current
//! snapshot always describe the same catalog.

use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::error::Result;
use crate::fuzzy::FuzzyMatcher;
use crate::index::{IndexHandle, InvertedIndex, SearchIndex};
use crate::matching::kmp;
use crate::scoring::PageRanker;
use crate::source::DocumentSource;
use crate::types::{DocId, Document, Field, PageRank, VocabularyEntry};
use crate::utils::tokenize;

/// Fields tokenized when narrowing search candidates.
const CANDIDATE_FIELDS: [Field; 2] = [Field::ProductName, Field::BrandName];

pub struct SearchEngine<S> {
    source: S,
    config: EngineConfig,
    index: IndexHandle,
    matcher: FuzzyMatcher,
    ranker: PageRanker,
}

impl<S: DocumentSource> SearchEngine<S> {
    /// Validate `config` and build the first index snapshot from `source`.
    pub fn new(source: S, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let index = IndexHandle::new(SearchIndex::build(source.all(), &config));
        Ok(Self {
            matcher: FuzzyMatcher::new(config.fuzzy_field),
            ranker: PageRanker::new(config.ranking_fields.clone()),
            source,
            config,
            index,
        })
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The index snapshot current at the time of the call.
    pub fn snapshot(&self) -> Arc<SearchIndex> {
        self.index.snapshot()
    }

    /// Rebuild every index from the source and swap it in.
    ///
    /// Picks up a changed vocabulary file. Returns the snapshot that was
    /// replaced.
    pub fn rebuild(&self) -> Arc<SearchIndex> {
        let documents = self.source.all();
        let fresh = SearchIndex::build(documents, &self.config);
        let previous = self.index.swap(fresh);
        info!(documents = documents.len(), "search index swapped");
        previous
    }

    /// Apply `edit` to the source, then [`rebuild`](Self::rebuild).
    ///
    /// Snapshots taken before the call keep describing the old documents.
    pub fn update_source<F>(&mut self, edit: F) -> Arc<SearchIndex>
    where
        F: FnOnce(&mut S),
    {
        edit(&mut self.source);
        self.rebuild()
    }

    /// Swap in a whole new source and rebuild. Returns the old source.
    pub fn replace_source(&mut self, source: S) -> S {
        let old = std::mem::replace(&mut self.source, source);
        self.rebuild();
        old
    }

    /// Documents whose product name contains `term`, ignoring case.
    ///
    /// Falls back to fuzzy matching when nothing contains it exactly.
    pub fn search(&self, term: &str) -> Vec<&Document> {
        let exact = self.exact_matches(term);
        if !exact.is_empty() {
            debug!(term, matches = exact.len(), "exact product-name matches");
            return exact;
        }
        self.fuzzy_search(term, self.config.max_edit_distance)
    }

    /// Only the fuzzy stage of [`search`](Self::search).
    pub fn fuzzy_search(&self, term: &str, max_edit_distance: usize) -> Vec<&Document> {
        self.matcher
            .find_matches(self.source.all(), term, max_edit_distance)
    }

    fn exact_matches(&self, term: &str) -> Vec<&Document> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.source
            .all()
            .iter()
            .filter(|document| kmp::exists(&document.product_name.to_lowercase(), &needle))
            .collect()
    }

    /// Candidates from [`search`](Self::search) narrowed to those where every
    /// query token is a prefix of one of their product or brand tokens.
    ///
    /// Results keep the order `search` produced.
    pub fn full_search(&self, term: &str) -> Vec<&Document> {
        let query_tokens = tokenize(term);
        if query_tokens.is_empty() {
            return Vec::new();
        }

        let candidates = self.search(term);
        let mut index = InvertedIndex::new();
        for (position, document) in candidates.iter().enumerate() {
            for token in tokenize(&document.text(&CANDIDATE_FIELDS)) {
                index.insert(&token, DocId::from(position));
            }
        }

        let mut matching: Option<BTreeSet<DocId>> = None;
        for token in &query_tokens {
            let hits = index.prefix_query(token);
            matching = Some(match matching {
                Some(so_far) => so_far.intersection(&hits).copied().collect(),
                None => hits,
            });
        }

        let positions = matching.unwrap_or_default();
        debug!(
            term,
            candidates = candidates.len(),
            matches = positions.len(),
            "full search"
        );
        positions
            .into_iter()
            .filter_map(|position| candidates.get(position.get() as usize).copied())
            .collect()
    }

    /// Documents with any indexed token starting with `prefix`, in source
    /// order.
    pub fn documents_with_prefix(&self, prefix: &str) -> Vec<&Document> {
        let ids = self.index.snapshot().inverted.prefix_query(prefix);
        self.source
            .all()
            .iter()
            .filter(|document| ids.contains(&document.id))
            .collect()
    }

    /// Vocabulary words starting with `prefix`.
    pub fn suggest(&self, prefix: &str) -> Vec<String> {
        self.index.snapshot().trie.prefix_query(prefix)
    }

    /// Vocabulary words containing `needle`.
    pub fn spellcheck(&self, needle: &str) -> Vec<String> {
        self.index.snapshot().trie.contains_substring(needle)
    }

    /// The most frequent completions of `prefix`. `k` defaults to the
    /// configured `topK`.
    pub fn complete(&self, prefix: &str, k: Option<usize>) -> Vec<VocabularyEntry> {
        let k = k.unwrap_or(self.config.top_k);
        self.index.snapshot().completions.top_completions(prefix, k)
    }

    /// Pages of the source ranked by occurrences of `term`, using the
    /// configured page size.
    pub fn rank_pages(&self, term: &str) -> Result<Vec<PageRank>> {
        self.rank_pages_with(term, self.config.page_size)
    }

    pub fn rank_pages_with(&self, term: &str, page_size: usize) -> Result<Vec<PageRank>> {
        self.ranker.rank_pages(self.source.all(), term, page_size)
    }

    /// Occurrences of `term` on one page at the configured page size.
    pub fn page_frequency(&self, term: &str, page: usize) -> Result<usize> {
        self.ranker
            .page_frequency(self.source.all(), term, page, self.config.page_size)
    }
}
