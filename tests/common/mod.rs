//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::path::Path;

use lapdex::{Document, EngineConfig, InMemorySource, SearchEngine};

// Re-export canonical test utilities from lapdex::testing
pub use lapdex::testing::{make_catalog, make_doc, make_laptop, sample_catalog};

/// Engine over `documents` with the default configuration.
pub fn engine_for(documents: Vec<Document>) -> SearchEngine<InMemorySource> {
    SearchEngine::new(InMemorySource::new(documents), EngineConfig::default())
        .expect("default config is valid")
}

/// Engine over the shared sample catalog.
pub fn sample_engine() -> SearchEngine<InMemorySource> {
    engine_for(sample_catalog())
}

/// Product names of `documents`, in order.
pub fn names(documents: &[&Document]) -> Vec<String> {
    documents
        .iter()
        .map(|document| document.product_name.clone())
        .collect()
}

/// Ids of `documents`, in order.
pub fn ids(documents: &[&Document]) -> Vec<u64> {
    documents.iter().map(|document| document.id.get()).collect()
}

/// Write `documents` as a JSON array.
pub fn write_catalog(path: &Path, documents: &[Document]) {
    let json = serde_json::to_string_pretty(documents).expect("documents serialize");
    std::fs::write(path, json).expect("write catalog");
}
