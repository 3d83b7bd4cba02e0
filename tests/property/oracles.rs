//! Reference oracles for differential testing.
//!
//! Simple, slow implementations that are easy to check by eye. When an
//! optimized structure disagrees with one of these, the oracle is right.

use std::cmp::Reverse;
use std::collections::BTreeMap;

/// Overlapping byte-level occurrences by sliding a window over `text`.
pub fn oracle_count(text: &str, pattern: &str) -> usize {
    let text = text.as_bytes();
    let pattern = pattern.as_bytes();
    if pattern.is_empty() || pattern.len() > text.len() {
        return 0;
    }
    text.windows(pattern.len())
        .filter(|window| *window == pattern)
        .count()
}

/// Top `k` words starting with `prefix`: accumulate, sort, truncate.
pub fn oracle_top_k(inserts: &[(String, u64)], prefix: &str, k: usize) -> Vec<(String, u64)> {
    if prefix.is_empty() {
        return Vec::new();
    }
    let mut totals: BTreeMap<&str, u64> = BTreeMap::new();
    for (word, delta) in inserts {
        let total = totals.entry(word.as_str()).or_insert(0);
        *total = total.saturating_add(*delta);
    }

    let mut ranked: Vec<(String, u64)> = totals
        .into_iter()
        .filter(|(word, _)| word.starts_with(prefix))
        .map(|(word, frequency)| (word.to_string(), frequency))
        .collect();
    ranked.sort_by_key(|(word, frequency)| (Reverse(*frequency), word.clone()));
    ranked.truncate(k);
    ranked
}

/// Page totals by summing per-document counts, in page order.
pub fn oracle_page_counts(texts: &[String], pattern: &str, page_size: usize) -> Vec<usize> {
    texts
        .chunks(page_size)
        .map(|page| page.iter().map(|text| oracle_count(text, pattern)).sum())
        .collect()
}
