//! Edit distance: metric laws, and agreement between the full and bounded
//! versions and an independent implementation.

use lapdex::{distance_within, edit_distance, levenshtein_within};
use proptest::prelude::*;

use crate::any_text_strategy;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Differential: full DP matches strsim's Levenshtein.
    #[test]
    fn prop_matches_strsim(a in any_text_strategy(), b in any_text_strategy()) {
        prop_assert_eq!(edit_distance(&a, &b), strsim::levenshtein(&a, &b));
    }

    #[test]
    fn prop_symmetric(a in any_text_strategy(), b in any_text_strategy()) {
        prop_assert_eq!(edit_distance(&a, &b), edit_distance(&b, &a));
    }

    #[test]
    fn prop_zero_iff_equal(a in any_text_strategy(), b in any_text_strategy()) {
        prop_assert_eq!(edit_distance(&a, &a), 0);
        prop_assert_eq!(edit_distance(&a, &b) == 0, a == b);
    }

    #[test]
    fn prop_distance_to_empty_is_length(a in any_text_strategy()) {
        prop_assert_eq!(edit_distance(&a, ""), a.chars().count());
    }

    #[test]
    fn prop_triangle_inequality(
        a in any_text_strategy(),
        b in any_text_strategy(),
        c in any_text_strategy(),
    ) {
        let ac = edit_distance(&a, &c);
        let ab = edit_distance(&a, &b);
        let bc = edit_distance(&b, &c);
        prop_assert!(ac <= ab + bc, "d({a:?},{c:?})={ac} > {ab} + {bc}");
    }

    /// The early exits never change the answer, only skip work.
    #[test]
    fn prop_bounded_agrees_with_full(
        a in any_text_strategy(),
        b in any_text_strategy(),
        max in 0usize..6,
    ) {
        let full = edit_distance(&a, &b);
        let bounded = distance_within(&a, &b, max);
        if full <= max {
            prop_assert_eq!(bounded, Some(full));
        } else {
            prop_assert_eq!(bounded, None);
        }
        prop_assert_eq!(levenshtein_within(&a, &b, max), full <= max);
    }
}
