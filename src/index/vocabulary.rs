// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Vocabulary: the word list that seeds the trie and the completion index.
//!
//! Built from documents or read from a plain-text file with one word per
//! line, optionally followed by `: <frequency>`:
//!
//! ```text
//! macbook: 5
//! macbookpro: 3
//! thinkpad
//! ```
//!
//! Lines without a frequency count once each, so a file listing the same word
//! three times gives it frequency 3. A frequency that is not a valid count
//! (`-1`, `1.5`, out of range) is dropped with a warning and the word counts
//! once.

use std::collections::BTreeMap;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{info, warn};

use crate::error::Result;
use crate::index::avl::RankedCompletionIndex;
use crate::index::trie::Trie;
use crate::types::{Document, Field, VocabularyEntry};
use crate::utils::{normalize, tokenize};

/// Ordered word → frequency map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    words: BTreeMap<String, u64>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `delta` to a word's frequency. Blank words are ignored.
    pub fn add(&mut self, word: &str, delta: u64) {
        let word = normalize(word);
        if word.is_empty() {
            return;
        }
        let frequency = self.words.entry(word).or_insert(0);
        *frequency = frequency.saturating_add(delta);
    }

    /// Every token of the selected fields, counted by occurrence.
    pub fn from_documents(documents: &[Document], fields: &[Field]) -> Self {
        #[cfg(feature = "parallel")]
        let token_lists: Vec<Vec<String>> = documents
            .par_iter()
            .map(|document| tokenize(&document.text(fields)))
            .collect();
        #[cfg(not(feature = "parallel"))]
        let token_lists: Vec<Vec<String>> = documents
            .iter()
            .map(|document| tokenize(&document.text(fields)))
            .collect();

        let mut vocabulary = Self::new();
        for token in token_lists.iter().flatten() {
            vocabulary.add(token, 1);
        }
        vocabulary
    }

    /// Each document's normalized product name, counted once per document.
    pub fn product_names(documents: &[Document]) -> Self {
        let mut vocabulary = Self::new();
        for document in documents {
            vocabulary.add(&document.product_name, 1);
        }
        vocabulary
    }

    /// Parse a vocabulary file.
    pub fn read_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let vocabulary = Self::parse(&content);
        info!(path = %path.display(), words = vocabulary.len(), "loaded vocabulary");
        Ok(vocabulary)
    }

    /// Like [`read_from`](Self::read_from), but a missing or unreadable file
    /// yields an empty vocabulary and a warning instead of an error.
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::read_from(path) {
            Ok(vocabulary) => vocabulary,
            Err(error) => {
                warn!(
                    path = %path.display(),
                    %error,
                    "vocabulary unavailable, continuing with an empty one"
                );
                Self::new()
            }
        }
    }

    /// Parse the line format described in the module docs.
    pub fn parse(content: &str) -> Self {
        let mut vocabulary = Self::new();
        for line in content.lines() {
            let (word, frequency) = split_frequency(line);
            vocabulary.add(word, frequency);
        }
        vocabulary
    }

    /// Write `word: frequency` lines in word order.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let mut out = BufWriter::new(fs::File::create(path)?);
        for (word, frequency) in &self.words {
            writeln!(out, "{word}: {frequency}")?;
        }
        out.flush()?;
        info!(path = %path.display(), words = self.len(), "wrote vocabulary");
        Ok(())
    }

    /// Merge another vocabulary, summing frequencies.
    pub fn extend(&mut self, other: &Vocabulary) {
        for (word, &frequency) in &other.words {
            let total = self.words.entry(word.clone()).or_insert(0);
            *total = total.saturating_add(frequency);
        }
    }

    pub fn frequency(&self, word: &str) -> Option<u64> {
        self.words.get(&normalize(word)).copied()
    }

    /// Words containing `needle`, in word order.
    pub fn words_containing(&self, needle: &str) -> Vec<String> {
        let needle = normalize(needle);
        if needle.is_empty() {
            return Vec::new();
        }
        self.words
            .keys()
            .filter(|word| word.contains(&needle))
            .cloned()
            .collect()
    }

    /// A trie holding every word.
    pub fn to_trie(&self) -> Trie {
        self.words.keys().collect()
    }

    /// A completion index holding every word with its frequency.
    pub fn to_completion_index(&self) -> RankedCompletionIndex {
        self.words
            .iter()
            .map(|(word, &frequency)| (word, frequency))
            .collect()
    }

    pub fn entries(&self) -> impl Iterator<Item = VocabularyEntry> + '_ {
        self.words
            .iter()
            .map(|(word, &frequency)| VocabularyEntry::new(word.clone(), frequency))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Split `word: 12` into the word and its frequency.
///
/// Everything after the first `:` is the frequency. A missing suffix, or one
/// that is not a non-negative integer, counts as a single occurrence.
fn split_frequency(line: &str) -> (&str, u64) {
    let Some((word, suffix)) = line.split_once(':') else {
        return (line, 1);
    };
    match suffix.trim().parse::<u64>() {
        Ok(frequency) => (word, frequency),
        Err(err) => {
            warn!(line, error = %err, "invalid word frequency, counting once");
            (word, 1)
        }
    }
}
