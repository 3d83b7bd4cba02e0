// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Where documents come from.
//!
//! The engine reads whatever a [`DocumentSource`] hands it and rebuilds its
//! indexes from that. Changes go through
//! [`SearchEngine::update_source`](crate::SearchEngine::update_source), which
//! rebuilds once the edit is done.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, Result};
use crate::types::{DocId, Document};

pub trait DocumentSource {
    /// Every document, in a stable order.
    fn all(&self) -> &[Document];

    fn by_id(&self, id: DocId) -> Option<&Document>;

    /// Like [`by_id`](Self::by_id), but a missing document is an error.
    fn require(&self, id: DocId) -> Result<&Document> {
        self.by_id(id).ok_or(EngineError::DocumentNotFound(id))
    }
}

/// Documents held in memory, in load order.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    documents: Vec<Document>,
    positions: HashMap<DocId, usize>,
}

impl InMemorySource {
    pub fn new(documents: Vec<Document>) -> Self {
        let positions = documents
            .iter()
            .enumerate()
            .map(|(position, document)| (document.id, position))
            .collect();
        Self {
            documents,
            positions,
        }
    }

    /// Load a JSON array of documents.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let documents: Vec<Document> = serde_json::from_str(&content)?;
        info!(path = %path.display(), documents = documents.len(), "loaded documents");
        Ok(Self::new(documents))
    }

    /// Insert `document`, or replace the one with the same id in place.
    ///
    /// Returns the replaced document.
    pub fn upsert(&mut self, document: Document) -> Option<Document> {
        match self.positions.get(&document.id) {
            Some(&position) => Some(std::mem::replace(&mut self.documents[position], document)),
            None => {
                self.positions.insert(document.id, self.documents.len());
                self.documents.push(document);
                None
            }
        }
    }

    /// Remove a document, keeping the order of the rest.
    pub fn remove(&mut self, id: DocId) -> Option<Document> {
        let position = self.positions.remove(&id)?;
        let removed = self.documents.remove(position);
        for (offset, later) in self.documents[position..].iter().enumerate() {
            self.positions.insert(later.id, position + offset);
        }
        Some(removed)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl DocumentSource for InMemorySource {
    fn all(&self) -> &[Document] {
        &self.documents
    }

    fn by_id(&self, id: DocId) -> Option<&Document> {
        self.positions
            .get(&id)
            .and_then(|&position| self.documents.get(position))
    }
}
