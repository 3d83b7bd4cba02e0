// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks shared by every index and ranker.
//!
//! Documents come from an external store and are only ever read. The engine
//! pulls text out of named fields, normalizes it into tokens, and produces
//! short-lived result values (`MatchCandidate`, `PageRank`,
//! `VocabularyEntry`) that callers consume and drop.
//!
//! # Invariants
//!
//! - **VocabularyEntry**: `frequency` is a sum of non-negative deltas, so it
//!   never goes below zero (enforced by `u64`).
//! - **MatchKind**: `Word < NGram`. At equal edit distance a single-token match
//!   beats a multi-token window. The derived `Ord` is the tie-break rule.
//! - **PageRank**: ordered by `count` descending, then `page` ascending, so two
//!   pages with the same count always come out in the same order.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// NEWTYPES
// =============================================================================

/// Type-safe document identifier.
///
/// Assigned by the external document store. The engine never invents ids for
/// stored documents; positional ids only appear inside per-query indexes.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[repr(transparent)]
pub struct DocId(pub u64);

impl DocId {
    /// Get the underlying value.
    #[inline]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for DocId {
    fn from(id: u64) -> Self {
        DocId(id)
    }
}

impl From<usize> for DocId {
    fn from(id: usize) -> Self {
        DocId(id as u64)
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// DOCUMENTS
// =============================================================================

/// Named text fields of a catalog record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    BrandName,
    ProductName,
    Os,
    Processor,
    Graphics,
    Display,
    Memory,
    Storage,
}

impl Field {
    /// Every indexable field, in record order.
    pub const ALL: [Field; 8] = [
        Field::BrandName,
        Field::ProductName,
        Field::Os,
        Field::Processor,
        Field::Graphics,
        Field::Display,
        Field::Memory,
        Field::Storage,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::BrandName => "brandName",
            Field::ProductName => "productName",
            Field::Os => "os",
            Field::Processor => "processor",
            Field::Graphics => "graphics",
            Field::Display => "display",
            Field::Memory => "memory",
            Field::Storage => "storage",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalog record as supplied by the document store.
///
/// Missing fields deserialize to empty strings and are skipped when text is
/// gathered for indexing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: DocId,
    #[serde(default)]
    pub brand_name: String,
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub os: String,
    #[serde(default)]
    pub processor: String,
    #[serde(default)]
    pub graphics: String,
    #[serde(default)]
    pub display: String,
    #[serde(default)]
    pub memory: String,
    #[serde(default)]
    pub storage: String,
}

impl Document {
    /// Text of a single field (empty when the store had nothing).
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::BrandName => &self.brand_name,
            Field::ProductName => &self.product_name,
            Field::Os => &self.os,
            Field::Processor => &self.processor,
            Field::Graphics => &self.graphics,
            Field::Display => &self.display,
            Field::Memory => &self.memory,
            Field::Storage => &self.storage,
        }
    }

    /// Non-empty fields joined with single spaces, in the order given.
    pub fn text(&self, fields: &[Field]) -> String {
        fields
            .iter()
            .map(|&field| self.field(field).trim())
            .filter(|value| !value.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

// =============================================================================
// RESULT VALUES
// =============================================================================

/// A (word, frequency) pair from the vocabulary or completion index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VocabularyEntry {
    pub word: String,
    pub frequency: u64,
}

impl VocabularyEntry {
    pub fn new(word: impl Into<String>, frequency: u64) -> Self {
        Self {
            word: word.into(),
            frequency,
        }
    }
}

impl fmt::Display for VocabularyEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.word, self.frequency)
    }
}

/// How a fuzzy match was found.
///
/// Variant order is rank order: a match against a single token is preferred
/// over a match against an n-gram window at the same edit distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchKind {
    Word,
    NGram,
}

/// A document that survived the fuzzy threshold, with what it matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchCandidate<'a> {
    pub document: &'a Document,
    /// Edit distance between the query and the matched token or window.
    pub distance: usize,
    pub kind: MatchKind,
    /// The token or n-gram that produced the match.
    pub matched: String,
}

impl MatchCandidate<'_> {
    /// Sort key: distance first, then match kind.
    #[inline]
    pub fn rank(&self) -> (usize, MatchKind) {
        (self.distance, self.kind)
    }
}

/// Aggregate occurrence count for one page of documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageRank {
    /// Zero-based page index in original document order.
    pub page: usize,
    pub count: usize,
}

impl PageRank {
    pub fn new(page: usize, count: usize) -> Self {
        Self { page, count }
    }
}

/// Greater means "ranks higher": more occurrences, then the earlier page.
impl Ord for PageRank {
    fn cmp(&self, other: &Self) -> Ordering {
        self.count
            .cmp(&other.count)
            .then_with(|| other.page.cmp(&self.page))
    }
}

impl PartialOrd for PageRank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
