//! Exact matchers: Boyer-Moore counts and the KMP existence gate.

use lapdex::matching::kmp;
use lapdex::{count_occurrences, StringMatcher};
use proptest::prelude::*;

use super::oracles::oracle_count;
use crate::{dense_pattern_strategy, dense_text_strategy};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Differential: Boyer-Moore counts every overlapping window match.
    #[test]
    fn prop_count_matches_oracle(
        text in dense_text_strategy(),
        pattern in dense_pattern_strategy(),
    ) {
        let matcher = StringMatcher::new(&pattern).unwrap();
        prop_assert_eq!(matcher.count(&text), oracle_count(&text, &pattern));
    }

    /// KMP answers "at least one" exactly when Boyer-Moore counts one.
    #[test]
    fn prop_kmp_agrees_with_count(
        text in dense_text_strategy(),
        pattern in dense_pattern_strategy(),
    ) {
        let count = count_occurrences(&text, &pattern).unwrap();
        prop_assert_eq!(kmp::exists(&text, &pattern), count > 0);
        prop_assert_eq!(kmp::exists(&text, &pattern), text.contains(pattern.as_str()));
    }

    /// Every prefix of the text is found in it.
    #[test]
    fn prop_prefixes_exist(text in "[a-z]{1,30}", len in 1usize..30) {
        let len = len.min(text.len());
        prop_assert!(kmp::exists(&text, &text[..len]));
    }

    /// Failure table entries are proper border lengths.
    #[test]
    fn prop_failure_table_borders(pattern in dense_pattern_strategy()) {
        let bytes = pattern.as_bytes();
        let table = kmp::failure_table(bytes);
        prop_assert_eq!(table.len(), bytes.len());
        for (i, &border) in table.iter().enumerate() {
            prop_assert!(border <= i);
            prop_assert_eq!(&bytes[..border], &bytes[i + 1 - border..=i]);
        }
    }
}
