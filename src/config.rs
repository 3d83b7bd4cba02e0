// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Engine configuration.
//!
//! Read from a JSON file with camelCase keys. Every key is optional:
//!
//! ```json
//! {
//!   "pageSize": 10,
//!   "maxEditDistance": 3,
//!   "topK": 5,
//!   "fuzzyField": "productName",
//!   "rankingFields": ["productName", "brandName"],
//!   "indexFields": ["brandName", "productName", "os"],
//!   "vocabularyPath": "vocab.txt"
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::types::Field;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    /// Documents per page when ranking pages.
    pub page_size: usize,
    /// Fuzzy threshold for the search fallback.
    pub max_edit_distance: usize,
    /// Completions returned when the caller does not ask for a count.
    pub top_k: usize,
    /// Field the fuzzy matcher splits into words.
    pub fuzzy_field: Field,
    /// Fields concatenated for page ranking and frequency counting.
    pub ranking_fields: Vec<Field>,
    /// Fields tokenized into the vocabulary and inverted index.
    pub index_fields: Vec<Field>,
    /// Optional vocabulary file merged into the built vocabulary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vocabulary_path: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            page_size: 10,
            max_edit_distance: 3,
            top_k: 5,
            fuzzy_field: Field::ProductName,
            ranking_fields: vec![Field::ProductName, Field::BrandName],
            index_fields: Field::ALL.to_vec(),
            vocabulary_path: None,
        }
    }
}

impl EngineConfig {
    /// Load and validate a JSON config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(EngineError::invalid_config("pageSize must be positive"));
        }
        if self.ranking_fields.is_empty() {
            return Err(EngineError::invalid_config(
                "rankingFields must name at least one field",
            ));
        }
        Ok(())
    }
}
