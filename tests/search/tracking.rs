//! Search-frequency counters gated on the term actually occurring.

use std::collections::HashMap;

use lapdex::{
    CounterStore, EngineError, InMemoryCounterStore, Result, SearchCounter,
    SearchFrequencyTracker,
};

use crate::common::sample_engine;

/// Store that remembers how often it was written to.
#[derive(Default)]
struct CountingStore {
    counters: HashMap<String, u64>,
    saves: usize,
}

impl CounterStore for CountingStore {
    fn find_by_term(&self, term: &str) -> Result<Option<SearchCounter>> {
        Ok(self.counters.get(term).map(|&count| SearchCounter {
            term: term.to_string(),
            count,
        }))
    }

    fn save(&mut self, counter: SearchCounter) -> Result<()> {
        self.saves += 1;
        self.counters.insert(counter.term, counter.count);
        Ok(())
    }

    fn all(&self) -> Result<Vec<SearchCounter>> {
        Ok(self
            .counters
            .iter()
            .map(|(term, &count)| SearchCounter {
                term: term.clone(),
                count,
            })
            .collect())
    }
}

#[test]
fn test_counts_only_searches_that_hit_their_context() {
    let mut tracker = SearchFrequencyTracker::new(InMemoryCounterStore::new());

    assert!(tracker.record("MacBook", "Apple MacBook Air M2").unwrap());
    assert!(tracker.record("macbook ", "apple macbook pro 14").unwrap());
    assert!(!tracker.record("macbook", "Dell XPS 13 Plus").unwrap());

    assert_eq!(tracker.count("macbook").unwrap(), 2);
}

#[test]
fn test_terms_share_counters_after_normalization() {
    let mut tracker = SearchFrequencyTracker::new(InMemoryCounterStore::new());
    tracker.record("  ZenBook", "asus zenbook 14").unwrap();
    tracker.record("zenbook", "zenbook duo").unwrap();
    tracker.record("xps", "dell xps 13").unwrap();

    let counts = tracker.all_counts().unwrap();
    assert_eq!(counts.keys().collect::<Vec<_>>(), vec!["xps", "zenbook"]);
    assert_eq!(counts["zenbook"], 2);
}

#[test]
fn test_absent_term_never_touches_the_store() {
    let mut tracker = SearchFrequencyTracker::new(CountingStore::default());
    tracker.record("thinkpad", "hp probook 450").unwrap();
    tracker.record("", "hp probook 450").unwrap();
    assert_eq!(tracker.store().saves, 0);

    tracker.record("probook", "hp probook 450").unwrap();
    assert_eq!(tracker.into_store().saves, 1);
}

#[test]
fn test_reset_keeps_the_counter() {
    let mut tracker = SearchFrequencyTracker::new(CountingStore::default());
    for _ in 0..3 {
        tracker.record("dell", "dell inspiron").unwrap();
    }
    tracker.reset("Dell").unwrap();

    assert_eq!(tracker.count("dell").unwrap(), 0);
    assert_eq!(tracker.all_counts().unwrap().get("dell"), Some(&0));
}

#[test]
fn test_searches_recorded_against_results() {
    let engine = sample_engine();
    let mut tracker = SearchFrequencyTracker::new(InMemoryCounterStore::new());

    for term in ["probook", "probok", "xps"] {
        for document in engine.search(term) {
            tracker.record(term, &document.product_name).unwrap();
        }
    }

    // The misspelled term reached results through fuzzy matching, but never
    // occurs in them, so it has no counter
    assert_eq!(tracker.count("probook").unwrap(), 2);
    assert_eq!(tracker.count("probok").unwrap(), 0);
    assert_eq!(tracker.count("xps").unwrap(), 1);
}

#[test]
fn test_counters_serialize_as_plain_records() {
    let counter = SearchCounter {
        term: "macbook".to_string(),
        count: 4,
    };
    let json = serde_json::to_string(&counter).unwrap();
    assert_eq!(json, r#"{"term":"macbook","count":4}"#);

    let back: SearchCounter = serde_json::from_str(&json).unwrap();
    assert_eq!(back, counter);
}

#[test]
fn test_store_failures_surface_to_the_caller() {
    struct ReadOnly;

    impl CounterStore for ReadOnly {
        fn find_by_term(&self, _term: &str) -> Result<Option<SearchCounter>> {
            Ok(None)
        }
        fn save(&mut self, _counter: SearchCounter) -> Result<()> {
            Err(EngineError::Store("read-only".to_string()))
        }
        fn all(&self) -> Result<Vec<SearchCounter>> {
            Ok(Vec::new())
        }
    }

    let mut tracker = SearchFrequencyTracker::new(ReadOnly);
    let err = tracker.record("hp", "hp envy").unwrap_err();
    assert!(err.to_string().contains("read-only"));
}
