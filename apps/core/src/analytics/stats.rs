//! Small numeric helpers shared by the analyzers.

use indexmap::IndexMap;
use std::hash::Hash;

/// Round to two decimal places.
///
/// Exact halves go to the even neighbour, so `2.125` becomes `2.12`.
pub fn round2(value: f64) -> f64 {
    let scaled = value * 100.0;
    if scaled.fract().abs() == 0.5 {
        scaled.round_ties_even() / 100.0
    } else {
        scaled.round() / 100.0
    }
}

/// Arithmetic mean, 0 for an empty slice
pub fn mean(values: &[u8]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().map(|&v| v as f64).sum::<f64>() / values.len() as f64
}

/// Median, averaging the two middle values for even lengths. 0 when empty.
pub fn median(values: &[u8]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let mut sorted = values.to_vec();
    sorted.sort_unstable();

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] as f64 + sorted[mid] as f64) / 2.0
    } else {
        sorted[mid] as f64
    }
}

/// Count occurrences, remembering the order in which items were first seen
pub fn count_occurrences<K, I>(items: I) -> IndexMap<K, usize>
where
    K: Hash + Eq,
    I: IntoIterator<Item = K>,
{
    let mut counts = IndexMap::new();
    for item in items {
        *counts.entry(item).or_insert(0) += 1;
    }
    counts
}

/// Order counts from most to least common.
///
/// Equal counts keep their first-seen order.
pub fn most_common<K: Hash + Eq>(counts: IndexMap<K, usize>) -> Vec<(K, usize)> {
    let mut ranked: Vec<(K, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}
