//! Page ranking: totals, order, and determinism.

use lapdex::{Field, PageRanker};
use proptest::prelude::*;

use super::oracles::oracle_page_counts;
use crate::common::make_catalog;
use crate::product_name_strategy;

fn term_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["dell", "pro", "zen", "e", "14"]).prop_map(str::to_string)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Differential: each page's count is the sum of its documents' counts.
    #[test]
    fn prop_page_counts_match_oracle(
        names in prop::collection::vec(product_name_strategy(), 0..25),
        term in term_strategy(),
        page_size in 1usize..6,
    ) {
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let docs = make_catalog(&refs);
        let ranker = PageRanker::new(vec![Field::ProductName]);

        let ranks = ranker.rank_pages(&docs, &term, page_size).unwrap();
        let expected = oracle_page_counts(&names, &term, page_size);

        prop_assert_eq!(ranks.len(), expected.len());
        for rank in &ranks {
            prop_assert_eq!(rank.count, expected[rank.page]);
            prop_assert_eq!(
                ranker.page_frequency(&docs, &term, rank.page, page_size).unwrap(),
                rank.count
            );
        }
    }

    /// Most occurrences first; ties broken by the earlier page.
    #[test]
    fn prop_pages_sorted_and_deterministic(
        names in prop::collection::vec(product_name_strategy(), 0..25),
        term in term_strategy(),
        page_size in 1usize..6,
    ) {
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let docs = make_catalog(&refs);
        let ranker = PageRanker::new(vec![Field::ProductName]);

        let ranks = ranker.rank_pages(&docs, &term, page_size).unwrap();
        for pair in ranks.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            prop_assert!(
                a.count > b.count || (a.count == b.count && a.page < b.page),
                "{:?} ranked before {:?}", a, b
            );
        }
        prop_assert_eq!(ranker.rank_pages(&docs, &term, page_size).unwrap(), ranks);
    }
}
