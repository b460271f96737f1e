//! Column aggregates over trip values: mode, value counts, sum and mean.
//!
//! Every function takes an iterator of already-extracted values, so callers
//! pick the column with a closure over [`crate::dataset::Trip`].

use std::cmp::Reverse;
use std::collections::BTreeMap;

/// Occurrence count of each distinct value, in ascending value order.
fn tally<T: Ord, I: IntoIterator<Item = T>>(values: I) -> BTreeMap<T, usize> {
    let mut counts = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }
    counts
}

/// The most frequent value, or `None` for no values.
///
/// Ties go to the smallest value, so results are reproducible.
pub fn mode<T: Ord, I: IntoIterator<Item = T>>(values: I) -> Option<T> {
    let mut best: Option<(T, usize)> = None;
    for (value, count) in tally(values) {
        // Strictly greater: an equal count never displaces a smaller value.
        if best.as_ref().map_or(true, |(_, top)| count > *top) {
            best = Some((value, count));
        }
    }
    best.map(|(value, _)| value)
}

/// Distinct values with their counts, most frequent first. Equal counts are
/// listed in ascending value order.
pub fn value_counts<T: Ord, I: IntoIterator<Item = T>>(values: I) -> Vec<(T, usize)> {
    let mut counts: Vec<(T, usize)> = tally(values).into_iter().collect();
    // Stable, so the ascending order from the map survives among ties.
    counts.sort_by_key(|(_, count)| Reverse(*count));
    counts
}

/// Sum of all values; `0.0` for none.
pub fn sum<I: IntoIterator<Item = f64>>(values: I) -> f64 {
    values.into_iter().sum()
}

/// Arithmetic mean, or `None` for no values.
pub fn mean<I: IntoIterator<Item = f64>>(values: I) -> Option<f64> {
    let (total, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(total, count), v| (total + v, count + 1));
    if count == 0 {
        None
    } else {
        Some(total / count as f64)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
