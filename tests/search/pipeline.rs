//! The end-to-end search pipeline: exact stage, fuzzy fallback, inverted
//! index narrowing, and snapshot rebuilds.

use std::sync::Arc;

use lapdex::{
    DocId, DocumentSource, EngineConfig, EngineError, Field, InMemorySource, InvertedIndex,
    SearchEngine,
};
use tempfile::TempDir;

use crate::common::{engine_for, ids, make_doc, names, sample_catalog, sample_engine, write_catalog};

#[test]
fn test_exact_substring_is_case_insensitive() {
    let engine = sample_engine();
    assert_eq!(names(&engine.search("MACBOOK")), vec!["MacBook Air M2", "MacBook Pro 14"]);
    assert_eq!(names(&engine.search("book 45")), vec!["ProBook 450 G9", "ProBook 455 G10"]);
}

#[test]
fn test_exact_hits_suppress_fuzzy_stage() {
    // An exact hit ends the search; no fuzzy candidates are appended
    let engine = sample_engine();
    assert_eq!(ids(&engine.search("xps")), vec![4]);
}

#[test]
fn test_no_exact_hit_falls_back_to_fuzzy() {
    let engine = sample_engine();
    assert_eq!(names(&engine.search("inspirn")), vec!["Inspiron 15 3520"]);
}

#[test]
fn test_nothing_close_enough_is_empty() {
    let engine = sample_engine();
    assert!(engine.search("chromebook duet").is_empty());
    assert!(engine.search("").is_empty());
}

#[test]
fn test_full_search_requires_every_token() {
    let engine = sample_engine();
    assert_eq!(ids(&engine.full_search("macbook")), vec![5, 6]);
    assert_eq!(ids(&engine.full_search("macbook pro")), vec![6]);
    // "book" is inside "probook" but is not a prefix of any token
    assert_eq!(ids(&engine.search("book 45")), vec![1, 3]);
    assert!(engine.full_search("book 45").is_empty());
}

#[test]
fn test_full_search_keeps_candidate_order() {
    let engine = engine_for(vec![
        make_doc(1, "Acer", "Swift Go"),
        make_doc(2, "Acer", "Swift X"),
        make_doc(3, "Acer", "Aspire Swift"),
    ]);
    assert_eq!(ids(&engine.full_search("swift")), vec![1, 2, 3]);
}

#[test]
fn test_documents_with_prefix_use_every_indexed_field() {
    let engine = sample_engine();
    assert_eq!(ids(&engine.documents_with_prefix("ryz")), vec![3]);
    assert_eq!(ids(&engine.documents_with_prefix("apple")), vec![5, 6]);
    assert!(engine.documents_with_prefix("").is_empty());
}

#[test]
fn test_reindexing_a_changed_document() {
    let fields = [Field::ProductName, Field::BrandName];
    let mut index = InvertedIndex::new();
    for document in sample_catalog() {
        index.index_document(&document, &fields);
    }
    assert_eq!(index.document_count(), 8);

    let renamed = make_doc(4, "Dell", "Precision 5680");
    index.reindex_document(&renamed, &fields);

    assert!(index.prefix_query("xps").is_empty());
    assert_eq!(index.prefix_query("precision").into_iter().collect::<Vec<_>>(), vec![DocId(4)]);
    assert_eq!(index.prefix_query("dell").len(), 2);
    assert_eq!(index.document_count(), 8);
}

#[test]
fn test_rebuild_leaves_old_snapshot_intact() {
    let engine = sample_engine();
    let held = engine.snapshot();
    let replaced = engine.rebuild();

    assert!(Arc::ptr_eq(&held, &replaced));
    assert!(held.trie.contains("zenbook"));
    assert_eq!(held.trie.len(), engine.snapshot().trie.len());
}

#[test]
fn test_renamed_document_visible_after_update() {
    let mut engine = sample_engine();
    let held = engine.snapshot();

    let replaced = engine.update_source(|source| {
        source.upsert(make_doc(4, "Dell", "Precision 5680"));
    });
    assert!(Arc::ptr_eq(&held, &replaced));

    assert_eq!(engine.suggest("prec"), vec!["precision"]);
    assert_eq!(ids(&engine.documents_with_prefix("precision")), vec![4]);
    assert!(engine.documents_with_prefix("xps").is_empty());
    assert!(engine.suggest("xps").is_empty());
    assert_eq!(ids(&engine.search("precision")), vec![4]);

    // The held snapshot still describes the catalog before the rename
    assert!(held.trie.contains("xps"));
    assert!(!held.trie.contains("precision"));
    assert!(held.inverted.prefix_query("precision").is_empty());
}

#[test]
fn test_removed_document_leaves_every_index() {
    let mut engine = sample_engine();
    engine.update_source(|source| {
        source.remove(DocId(7));
    });

    assert!(engine.search("zenbook").iter().all(|d| d.id != DocId(7)));
    assert!(engine.suggest("zen").is_empty());
    assert!(engine.documents_with_prefix("asus").is_empty());
    assert_eq!(engine.source().len(), 7);
}

#[test]
fn test_engine_from_json_catalog() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("laptops.json");
    write_catalog(&path, &sample_catalog());

    let source = InMemorySource::from_json_file(&path).unwrap();
    assert_eq!(source.all().len(), 8);
    assert_eq!(source.require(DocId(7)).unwrap().brand_name, "Asus");
    assert!(matches!(
        source.require(DocId(99)),
        Err(EngineError::DocumentNotFound(DocId(99)))
    ));

    let engine = SearchEngine::new(source, EngineConfig::default()).unwrap();
    assert_eq!(ids(&engine.search("zenbook")), vec![7]);
}

#[test]
fn test_malformed_catalog_is_a_json_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "[{\"id\": \"seven\"}]").unwrap();

    assert!(matches!(
        InMemorySource::from_json_file(&path),
        Err(EngineError::Json(_))
    ));
}
