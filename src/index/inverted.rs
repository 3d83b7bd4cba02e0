// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Inverted index: token → documents, stored in a trie.
//!
//! Each terminal node carries the set of documents the token was seen in.
//! A prefix query unions the sets of every terminal below the prefix node, so
//! "think" finds every document containing "thinkpad" or "thinkbook".
//!
//! Tokens are also kept per document. Changing or removing a document
//! rebuilds the trie from those lists instead of pruning nodes in place.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::index::trie::Node;
use crate::types::{DocId, Document, Field};
use crate::utils::{to_token, tokenize};

type Postings = BTreeSet<DocId>;

#[derive(Debug, Clone, Default)]
pub struct InvertedIndex {
    root: Node<Postings>,
    /// Tokens contributed by each document, in insertion order.
    documents: BTreeMap<DocId, Vec<String>>,
    words: usize,
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `doc` contains `word`. Returns `false` if the word has no
    /// token characters and nothing was stored.
    pub fn insert(&mut self, word: &str, doc: DocId) -> bool {
        let token = to_token(word);
        if token.is_empty() {
            return false;
        }
        self.insert_token(&token, doc);
        self.documents.entry(doc).or_default().push(token);
        true
    }

    fn insert_token(&mut self, token: &str, doc: DocId) {
        let node = self.root.walk_or_create(token);
        if !node.terminal {
            node.terminal = true;
            self.words += 1;
        }
        node.payload.insert(doc);
    }

    /// Tokenize the selected fields of `document` and index every token.
    pub fn index_document(&mut self, document: &Document, fields: &[Field]) {
        let text = document.text(fields);
        let tokens = tokenize(&text);
        debug!(doc = %document.id, tokens = tokens.len(), "indexing document");
        for token in &tokens {
            self.insert(token, document.id);
        }
    }

    /// Replace everything indexed for `document` with its current text.
    pub fn reindex_document(&mut self, document: &Document, fields: &[Field]) {
        self.remove_document(document.id);
        self.index_document(document, fields);
    }

    /// Forget a document. Returns `false` if it was never indexed.
    pub fn remove_document(&mut self, doc: DocId) -> bool {
        if self.documents.remove(&doc).is_none() {
            return false;
        }
        self.rebuild();
        true
    }

    /// Rebuild the trie from the retained per-document token lists.
    fn rebuild(&mut self) {
        self.root = Node::default();
        self.words = 0;

        let documents = std::mem::take(&mut self.documents);
        for (&doc, tokens) in &documents {
            for token in tokens {
                self.insert_token(token, doc);
            }
        }
        self.documents = documents;

        debug!(
            documents = self.documents.len(),
            words = self.words,
            "rebuilt inverted index"
        );
    }

    /// Documents containing a token that starts with `prefix`.
    ///
    /// An empty prefix, or one with no path in the trie, yields nothing.
    pub fn prefix_query(&self, prefix: &str) -> BTreeSet<DocId> {
        let mut path = to_token(prefix);
        let mut docs = BTreeSet::new();
        if path.is_empty() {
            return docs;
        }
        if let Some(start) = self.root.find(&path) {
            start.for_each_terminal(&mut path, &mut |_: &str, node: &Node<Postings>| {
                docs.extend(node.payload.iter().copied());
            });
        }
        docs
    }

    /// Indexed words containing `needle`, in lexicographic order.
    pub fn words_containing(&self, needle: &str) -> Vec<String> {
        let needle = to_token(needle);
        if needle.is_empty() {
            return Vec::new();
        }
        self.words()
            .into_iter()
            .filter(|word| word.contains(&needle))
            .collect()
    }

    /// Every indexed word, in lexicographic order.
    pub fn words(&self) -> Vec<String> {
        let mut words = Vec::with_capacity(self.words);
        self.root
            .for_each_terminal(&mut String::new(), &mut |word: &str, _: &Node<Postings>| {
                words.push(word.to_string());
            });
        words
    }

    /// Number of distinct documents with at least one indexed token.
    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// Number of distinct indexed words.
    pub fn len(&self) -> usize {
        self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words == 0
    }
}
