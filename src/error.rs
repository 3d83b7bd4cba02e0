// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for the search engine.
//!
//! Most of the engine cannot fail. Edit distance, occurrence counting, and
//! substring existence are total functions, and index queries answer "not
//! found" with an empty result. What remains is I/O on vocabulary and
//! document files, configuration problems, and callers breaking a
//! precondition (an empty Boyer-Moore pattern, a zero page size).

use std::io;

use thiserror::Error;

use crate::types::DocId;

/// Everything that can go wrong in `lapdex`.
#[derive(Error, Debug)]
pub enum EngineError {
    /// I/O errors (vocabulary files, document files, config files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A pattern-based matcher was constructed with an empty pattern
    #[error("pattern must not be empty")]
    EmptyPattern,

    /// Pages need at least one document each
    #[error("page size must be positive, got {0}")]
    InvalidPageSize(usize),

    /// Configuration failed validation
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A document lookup by id came back empty
    #[error("document {0} not found")]
    DocumentNotFound(DocId),

    /// The external counter store rejected a read or write
    #[error("counter store error: {0}")]
    Store(String),
}

/// Result type alias for operations that may fail with [`EngineError`].
pub type Result<T> = std::result::Result<T, EngineError>;

impl EngineError {
    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        EngineError::InvalidConfig(msg.into())
    }

    /// Create a new counter store error.
    pub fn store<S: Into<String>>(msg: S) -> Self {
        EngineError::Store(msg.into())
    }
}
