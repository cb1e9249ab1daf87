//! Aggregate helpers shared by the section computations.
//!
//! Every helper returns `None` on empty input instead of NaN or a panic.

use std::collections::BTreeMap;

use super::types::ValueCount;

/// Count occurrences of each value, keyed in ascending order.
fn tally<T: Ord, I: IntoIterator<Item = T>>(values: I) -> BTreeMap<T, usize> {
    let mut counts = BTreeMap::new();
    for v in values {
        *counts.entry(v).or_insert(0usize) += 1;
    }
    counts
}

/// Most frequent value and its count. Ties resolve to the smallest value.
pub fn mode_with_count<T: Ord, I: IntoIterator<Item = T>>(values: I) -> Option<(T, usize)> {
    let mut best: Option<(T, usize)> = None;
    // Ascending iteration plus a strict `>` keeps the smallest key among ties.
    for (value, count) in tally(values) {
        if best.as_ref().is_none_or(|(_, c)| count > *c) {
            best = Some((value, count));
        }
    }
    best
}

/// Most frequent value. Ties resolve to the smallest value.
pub fn mode<T: Ord, I: IntoIterator<Item = T>>(values: I) -> Option<T> {
    mode_with_count(values).map(|(v, _)| v)
}

/// Frequency of each distinct value, most frequent first, ties by value.
pub fn value_counts<'a, I: IntoIterator<Item = &'a str>>(values: I) -> Vec<ValueCount> {
    let mut rows: Vec<ValueCount> = tally(values)
        .into_iter()
        .map(|(value, count)| ValueCount {
            value: value.to_string(),
            count,
        })
        .collect();
    // Stable sort keeps the ascending key order among equal counts.
    rows.sort_by(|a, b| b.count.cmp(&a.count));
    rows
}

/// Safe mean returning `None` when there are no values.
pub fn safe_mean(sum: f64, count: usize) -> Option<f64> {
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// Round half to even at the given number of decimal places.
///
/// Rounds the exact stored value, not a scaled product: `1.115` is stored
/// just below and goes down.
pub fn round_to(value: f64, places: usize) -> f64 {
    if places == 0 || !value.is_finite() {
        return value.round_ties_even();
    }
    format!("{value:.places$}").parse().unwrap_or(value)
}

/// Seconds → whole minutes, half to even.
pub fn whole_minutes(seconds: f64) -> i64 {
    round_to(seconds / 60.0, 0) as i64
}

/// Seconds → minutes with two decimals.
pub fn minutes_2dp(seconds: f64) -> f64 {
    round_to(seconds / 60.0, 2)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
