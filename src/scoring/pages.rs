// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Page ranking by term occurrences.
//!
//! The collection is cut into fixed-size pages in its original order. Each
//! page's score is the number of times the term occurs across the ranked
//! fields of its documents, counted with Boyer-Moore on lowercased text.
//! Pages come back most occurrences first; equal counts keep page order.
//!
//! ```text
//! docs:   [d0 d1] [d2 d3] [d4]      page_size = 2
//! "dell":    2       1      0
//! result: (0, 2) (1, 1) (2, 0)
//! ```

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::debug;

use crate::error::{EngineError, Result};
use crate::matching::StringMatcher;
use crate::scoring::heap::MaxHeap;
use crate::types::{Document, Field, PageRank};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRanker {
    fields: Vec<Field>,
}

impl Default for PageRanker {
    fn default() -> Self {
        Self::new(vec![Field::ProductName, Field::BrandName])
    }
}

impl PageRanker {
    /// Count occurrences across `fields` of each document.
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Every page with its occurrence count, most occurrences first.
    ///
    /// Fails on a zero page size or a blank term. An empty collection has no
    /// pages.
    pub fn rank_pages(
        &self,
        documents: &[Document],
        term: &str,
        page_size: usize,
    ) -> Result<Vec<PageRank>> {
        let matcher = self.matcher(term, page_size)?;

        #[cfg(feature = "parallel")]
        let counts: Vec<usize> = documents
            .par_chunks(page_size)
            .map(|page| self.count_page(&matcher, page))
            .collect();
        #[cfg(not(feature = "parallel"))]
        let counts: Vec<usize> = documents
            .chunks(page_size)
            .map(|page| self.count_page(&matcher, page))
            .collect();

        let mut heap = MaxHeap::with_capacity(counts.len());
        for (page, count) in counts.into_iter().enumerate() {
            heap.add(PageRank::new(page, count));
        }
        let ranked = heap.drain_sorted();

        debug!(
            term = matcher.pattern(),
            page_size,
            pages = ranked.len(),
            "ranked pages"
        );
        Ok(ranked)
    }

    /// Occurrences of `term` on a single page. A page past the end counts 0.
    pub fn page_frequency(
        &self,
        documents: &[Document],
        term: &str,
        page: usize,
        page_size: usize,
    ) -> Result<usize> {
        let matcher = self.matcher(term, page_size)?;

        let start = page.saturating_mul(page_size);
        if start >= documents.len() {
            return Ok(0);
        }
        let end = start.saturating_add(page_size).min(documents.len());
        Ok(self.count_page(&matcher, &documents[start..end]))
    }

    fn matcher(&self, term: &str, page_size: usize) -> Result<StringMatcher> {
        if page_size == 0 {
            return Err(EngineError::InvalidPageSize(page_size));
        }
        StringMatcher::new(&term.trim().to_lowercase())
    }

    fn count_page(&self, matcher: &StringMatcher, page: &[Document]) -> usize {
        page.iter()
            .map(|document| matcher.count(&document.text(&self.fields).to_lowercase()))
            .sum()
    }
}
