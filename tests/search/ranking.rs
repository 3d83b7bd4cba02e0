//! Page ranking by term occurrences, and the heap underneath it.

use lapdex::{
    Document, EngineConfig, EngineError, Field, InMemorySource, MaxHeap, PageRank, PageRanker,
    SearchEngine,
};

use crate::common::{engine_for, make_doc, sample_engine};

fn pairs(ranks: &[PageRank]) -> Vec<(usize, usize)> {
    ranks.iter().map(|rank| (rank.page, rank.count)).collect()
}

fn dell_catalog() -> Vec<Document> {
    vec![
        make_doc(1, "Dell", "Latitude 5440"),
        make_doc(2, "Dell", "XPS 13"),
        make_doc(3, "Dell", "Vostro 3520"),
        make_doc(4, "Lenovo", "Legion 5"),
        make_doc(5, "Asus", "ROG Strix G16"),
    ]
}

#[test]
fn test_pages_ranked_by_occurrences() {
    let ranks = PageRanker::default()
        .rank_pages(&dell_catalog(), "dell", 2)
        .unwrap();
    assert_eq!(pairs(&ranks), vec![(0, 2), (1, 1), (2, 0)]);
}

#[test]
fn test_busier_late_page_outranks_early_one() {
    let docs = vec![
        make_doc(1, "Acer", "Aspire 3"),
        make_doc(2, "HP", "Pavilion 15"),
        make_doc(3, "HP", "Envy 13"),
        make_doc(4, "HP", "Spectre x360"),
    ];
    let ranks = PageRanker::default().rank_pages(&docs, "HP", 2).unwrap();
    assert_eq!(pairs(&ranks), vec![(1, 2), (0, 1)]);
}

#[test]
fn test_equal_counts_keep_page_order() {
    let docs = vec![
        make_doc(1, "Asus", "Vivobook"),
        make_doc(2, "Asus", "Zenbook"),
        make_doc(3, "Asus", "ExpertBook"),
    ];
    let ranks = PageRanker::default().rank_pages(&docs, "book", 1).unwrap();
    assert_eq!(pairs(&ranks), vec![(0, 1), (1, 1), (2, 1)]);
}

#[test]
fn test_overlapping_occurrences_all_count() {
    let docs = vec![make_doc(1, "", "aaaa")];
    let ranks = PageRanker::new(vec![Field::ProductName])
        .rank_pages(&docs, "aa", 5)
        .unwrap();
    assert_eq!(pairs(&ranks), vec![(0, 3)]);
}

#[test]
fn test_only_ranked_fields_are_counted() {
    let docs = vec![make_doc(1, "Dell", "Dell Pro 14")];
    let brand_only = PageRanker::new(vec![Field::BrandName]);
    assert_eq!(brand_only.fields(), &[Field::BrandName]);
    assert_eq!(pairs(&brand_only.rank_pages(&docs, "dell", 1).unwrap()), vec![(0, 1)]);
    assert_eq!(
        pairs(&PageRanker::default().rank_pages(&docs, "dell", 1).unwrap()),
        vec![(0, 2)]
    );
}

#[test]
fn test_empty_collection_has_no_pages() {
    assert!(PageRanker::default().rank_pages(&[], "dell", 3).unwrap().is_empty());
}

#[test]
fn test_invalid_arguments_are_errors() {
    let docs = dell_catalog();
    assert!(matches!(
        PageRanker::default().rank_pages(&docs, "dell", 0),
        Err(EngineError::InvalidPageSize(0))
    ));
    assert!(matches!(
        PageRanker::default().rank_pages(&docs, "   ", 2),
        Err(EngineError::EmptyPattern)
    ));
}

#[test]
fn test_single_page_frequency() {
    let ranker = PageRanker::default();
    let docs = dell_catalog();
    assert_eq!(ranker.page_frequency(&docs, "dell", 0, 2).unwrap(), 2);
    assert_eq!(ranker.page_frequency(&docs, "dell", 1, 2).unwrap(), 1);
    assert_eq!(ranker.page_frequency(&docs, "dell", 9, 2).unwrap(), 0);
}

#[test]
fn test_engine_uses_configured_page_size() {
    let engine = sample_engine();
    // Default page size 10 puts the whole sample catalog on one page
    assert_eq!(pairs(&engine.rank_pages("apple").unwrap()), vec![(0, 2)]);
    assert_eq!(
        pairs(&engine.rank_pages_with("apple", 4).unwrap()),
        vec![(1, 2), (0, 0)]
    );

    let small_pages = SearchEngine::new(
        InMemorySource::new(dell_catalog()),
        EngineConfig {
            page_size: 2,
            ..EngineConfig::default()
        },
    )
    .unwrap();
    assert_eq!(small_pages.page_frequency("dell", 1).unwrap(), 1);
}

#[test]
fn test_engine_rank_rejects_blank_term() {
    let engine = engine_for(dell_catalog());
    assert!(matches!(engine.rank_pages(""), Err(EngineError::EmptyPattern)));
}

#[test]
fn test_heap_drains_in_descending_order() {
    let mut heap: MaxHeap<u32> = [5, 1, 9, 3, 9, 7].into_iter().collect();
    assert_eq!(heap.len(), 6);
    assert_eq!(heap.peek(), Some(&9));
    assert_eq!(heap.drain_sorted(), vec![9, 9, 7, 5, 3, 1]);
    assert!(heap.is_empty());
    assert_eq!(heap.remove(), None);
}

#[test]
fn test_heap_of_page_ranks() {
    let mut heap = MaxHeap::new();
    heap.add(PageRank::new(2, 4));
    heap.add(PageRank::new(0, 4));
    heap.add(PageRank::new(1, 7));
    assert_eq!(heap.remove(), Some(PageRank::new(1, 7)));
    assert_eq!(heap.remove(), Some(PageRank::new(0, 4)));
    assert_eq!(heap.remove(), Some(PageRank::new(2, 4)));
}
