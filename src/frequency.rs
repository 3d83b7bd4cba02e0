// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search-frequency tracking.
//!
//! A counter is bumped only when the searched term actually occurs in the
//! context it was searched against (checked with KMP). Terms are trimmed and
//! lowercased before every lookup, so "  Dell " and "dell" share a counter.
//!
//! Persistence belongs to whoever implements [`CounterStore`]. The in-memory
//! store here is for tests and the CLI.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::matching::kmp;
use crate::utils::normalize_term;

/// A stored counter for one normalized search term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCounter {
    pub term: String,
    pub count: u64,
}

/// External storage for search counters.
pub trait CounterStore {
    fn find_by_term(&self, term: &str) -> Result<Option<SearchCounter>>;
    fn save(&mut self, counter: SearchCounter) -> Result<()>;
    fn all(&self) -> Result<Vec<SearchCounter>>;
}

/// Counters held in a map. Never fails.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCounterStore {
    counters: BTreeMap<String, u64>,
}

impl InMemoryCounterStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CounterStore for InMemoryCounterStore {
    fn find_by_term(&self, term: &str) -> Result<Option<SearchCounter>> {
        Ok(self.counters.get(term).map(|&count| SearchCounter {
            term: term.to_string(),
            count,
        }))
    }

    fn save(&mut self, counter: SearchCounter) -> Result<()> {
        self.counters.insert(counter.term, counter.count);
        Ok(())
    }

    fn all(&self) -> Result<Vec<SearchCounter>> {
        Ok(self
            .counters
            .iter()
            .map(|(term, &count)| SearchCounter {
                term: term.clone(),
                count,
            })
            .collect())
    }
}

#[derive(Debug, Default)]
pub struct SearchFrequencyTracker<S> {
    store: S,
}

impl<S: CounterStore> SearchFrequencyTracker<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Count a search for `search_term` if it occurs in `context`.
    ///
    /// The context is lowercased before the check. Returns whether a counter
    /// was incremented; a blank term never is.
    pub fn record(&mut self, search_term: &str, context: &str) -> Result<bool> {
        let term = normalize_term(search_term);
        if !kmp::exists(&context.to_lowercase(), &term) {
            debug!(term = %term, "term not found in context, counter unchanged");
            return Ok(false);
        }

        let count = match self.store.find_by_term(&term)? {
            Some(counter) => counter.count.saturating_add(1),
            None => 1,
        };
        self.store.save(SearchCounter {
            term: term.clone(),
            count,
        })?;

        debug!(term = %term, count, "recorded search");
        Ok(true)
    }

    /// Current count for a term, 0 when it has never been recorded.
    pub fn count(&self, search_term: &str) -> Result<u64> {
        let term = normalize_term(search_term);
        Ok(self
            .store
            .find_by_term(&term)?
            .map_or(0, |counter| counter.count))
    }

    /// Every stored counter, keyed by term.
    pub fn all_counts(&self) -> Result<BTreeMap<String, u64>> {
        Ok(self
            .store
            .all()?
            .into_iter()
            .map(|counter| (counter.term, counter.count))
            .collect())
    }

    /// Set an existing counter back to 0. Unknown terms are left alone.
    pub fn reset(&mut self, search_term: &str) -> Result<()> {
        let term = normalize_term(search_term);
        if let Some(mut counter) = self.store.find_by_term(&term)? {
            counter.count = 0;
            self.store.save(counter)?;
        }
        Ok(())
    }
}
