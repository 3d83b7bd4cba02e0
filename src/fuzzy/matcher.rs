// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Typo-tolerant document matching over a name field.
//!
//! The query decides the window size. A one-word query is compared against
//! every word of the name; a two-word query is compared against every
//! two-word window, and so on. That way "thinkpad t14" can still match
//! "ThinkPad T14 Gen 4" even though neither query word alone is close to the
//! whole phrase.
//!
//! Each document gets at most one candidate: its best word-level match and its
//! best n-gram-level match compete, and the lower `(distance, kind)` wins.
//! Ranking is `(distance, kind)` ascending with a stable sort, so equal-rank
//! documents keep their input order.

use tracing::debug;

use crate::fuzzy::levenshtein::distance_within;
use crate::types::{Document, Field, MatchCandidate, MatchKind};
use crate::utils::{normalize, split_words};

/// Edit distance threshold that suits a term of this length.
///
/// Short terms get more slack because a single typo is a large fraction of
/// them; long terms get less because loose thresholds on long words match
/// nearly everything.
///
/// | Length | Threshold |
/// |--------|-----------|
/// | ≤ 2    | 3         |
/// | ≤ 4    | 2         |
/// | > 4    | 1         |
pub fn max_edit_distance_for(term: &str) -> usize {
    match term.trim().chars().count() {
        0..=2 => 3,
        3..=4 => 2,
        _ => 1,
    }
}

/// Every contiguous run of `size` words, joined by single spaces.
///
/// Fewer words than `size` (or `size == 0`) yields no n-grams.
pub fn ngrams(words: &[String], size: usize) -> Vec<String> {
    if size == 0 || words.len() < size {
        return Vec::new();
    }
    words.windows(size).map(|window| window.join(" ")).collect()
}

/// Ranks documents against a query by edit distance on one text field.
#[derive(Debug, Clone, Copy)]
pub struct FuzzyMatcher {
    field: Field,
}

impl Default for FuzzyMatcher {
    fn default() -> Self {
        Self::new(Field::ProductName)
    }
}

impl FuzzyMatcher {
    /// Match against `field` of each document.
    pub fn new(field: Field) -> Self {
        Self { field }
    }

    pub fn field(&self) -> Field {
        self.field
    }

    /// Documents within `max_edit_distance` of `query`, best match first.
    pub fn find_matches<'a>(
        &self,
        documents: &'a [Document],
        query: &str,
        max_edit_distance: usize,
    ) -> Vec<&'a Document> {
        self.candidates(documents, query, max_edit_distance)
            .into_iter()
            .map(|candidate| candidate.document)
            .collect()
    }

    /// Ranked candidates behind `find_matches`, one per matching document.
    pub fn candidates<'a>(
        &self,
        documents: &'a [Document],
        query: &str,
        max_edit_distance: usize,
    ) -> Vec<MatchCandidate<'a>> {
        let query = normalize(query);
        if query.is_empty() || documents.is_empty() {
            return Vec::new();
        }

        let ngram_size = query.split(' ').count();
        let mut candidates: Vec<MatchCandidate<'a>> = documents
            .iter()
            .filter_map(|document| self.best_match(document, &query, ngram_size, max_edit_distance))
            .collect();

        // Stable: equal ranks keep document order
        candidates.sort_by_key(MatchCandidate::rank);

        debug!(
            query = %query,
            ngram_size,
            max_edit_distance,
            matches = candidates.len(),
            "fuzzy match"
        );
        candidates
    }

    /// Best word-level or n-gram-level match for one document, if any.
    fn best_match<'a>(
        &self,
        document: &'a Document,
        query: &str,
        ngram_size: usize,
        max_edit_distance: usize,
    ) -> Option<MatchCandidate<'a>> {
        let words = split_words(document.field(self.field));
        if words.is_empty() {
            return None;
        }

        let word_match = closest(query, words.iter().cloned(), max_edit_distance);
        let ngram_match = closest(query, ngrams(&words, ngram_size), max_edit_distance);

        let word_candidate = word_match.map(|(distance, matched)| MatchCandidate {
            document,
            distance,
            kind: MatchKind::Word,
            matched,
        });
        let ngram_candidate = ngram_match.map(|(distance, matched)| MatchCandidate {
            document,
            distance,
            kind: MatchKind::NGram,
            matched,
        });

        match (word_candidate, ngram_candidate) {
            (Some(word), Some(ngram)) => Some(if ngram.rank() < word.rank() { ngram } else { word }),
            (word, ngram) => word.or(ngram),
        }
    }
}

/// The option closest to `query` within `max` edits; first wins on ties.
fn closest(
    query: &str,
    options: impl IntoIterator<Item = String>,
    max: usize,
) -> Option<(usize, String)> {
    let mut best: Option<(usize, String)> = None;
    for option in options {
        // Only a strictly closer option can replace the current best
        let bound = match &best {
            Some((0, _)) => break,
            Some((distance, _)) => distance - 1,
            None => max,
        };
        if let Some(distance) = distance_within(query, &option, bound) {
            best = Some((distance, option));
        }
    }
    best
}
