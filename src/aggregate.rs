//! Display aggregates over immutable record collections
//!
//! Every panel derives its summary statistics through these functions.
//! The source collections never change during a session, so there is no
//! caching or incremental update: each render recomputes from scratch.
//!
//! Empty collections are a defined state, not an error: [`mean`] and
//! [`share`] return `None` instead of propagating a NaN into the UI.

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::hash::Hash;

/// Count records matching a predicate
pub fn count_where<T, P>(records: &[T], predicate: P) -> usize
where
    P: Fn(&T) -> bool,
{
    records.iter().filter(|r| predicate(r)).count()
}

/// Arithmetic mean of a numeric field across all records
///
/// Returns `None` for an empty collection.
pub fn mean<T, F>(records: &[T], selector: F) -> Option<f64>
where
    F: Fn(&T) -> f64,
{
    if records.is_empty() {
        return None;
    }
    let sum: f64 = records.iter().map(&selector).sum();
    Some(sum / records.len() as f64)
}

/// Sum of a numeric field across all records
pub fn sum_by<T, F>(records: &[T], selector: F) -> u64
where
    F: Fn(&T) -> u64,
{
    records.iter().map(selector).sum()
}

/// Elapsed time between two timestamps, rounded down to whole hours
///
/// Inverted inputs (end before start) clamp to zero.
pub fn elapsed_whole_hours(start: DateTime<Utc>, end: DateTime<Utc>) -> u64 {
    let hours = end.signed_duration_since(start).num_hours();
    hours.max(0) as u64
}

/// Count records per category value
pub fn group_counts<T, K, F>(records: &[T], key: F) -> HashMap<K, usize>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut counts = HashMap::new();
    for record in records {
        *counts.entry(key(record)).or_insert(0) += 1;
    }
    counts
}

/// Percentage share of a part against a whole
///
/// Returns `None` when the whole is zero.
pub fn share(part: usize, whole: usize) -> Option<f64> {
    if whole == 0 {
        return None;
    }
    Some(part as f64 / whole as f64 * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ts(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s)
            .map(|t| t.with_timezone(&Utc))
            .unwrap()
    }

    #[test]
    fn test_count_where() {
        let values = [1, 2, 3, 4, 5, 6];
        assert_eq!(count_where(&values, |v| v % 2 == 0), 3);
        assert_eq!(count_where(&values, |_| false), 0);
    }

    #[test]
    fn test_count_where_empty() {
        let values: [i32; 0] = [];
        assert_eq!(count_where(&values, |_| true), 0);
    }

    #[test]
    fn test_mean_of_reliability_fixture() {
        let reliabilities = [95.0_f64, 98.0, 92.0, 89.0, 75.0];
        let avg = mean(&reliabilities, |r| *r).unwrap();
        assert!((avg - 89.8).abs() < 1e-9);
    }

    #[test]
    fn test_mean_empty_is_none() {
        let values: [f64; 0] = [];
        assert_eq!(mean(&values, |v| *v), None);
    }

    #[test]
    fn test_sum_by() {
        let values = [234_u64, 1456, 3456, 567, 123];
        assert_eq!(sum_by(&values, |v| *v), 5836);
    }

    #[test]
    fn test_elapsed_whole_hours_same_instant() {
        let t = ts("2025-01-20T14:30:00Z");
        assert_eq!(elapsed_whole_hours(t, t), 0);
    }

    #[test]
    fn test_elapsed_whole_hours_rounds_down() {
        // 15.25h elapsed rounds down to 15
        let a = ts("2025-01-19T22:45:00Z");
        let b = ts("2025-01-20T14:00:00Z");
        assert_eq!(elapsed_whole_hours(a, b), 15);
    }

    #[test]
    fn test_elapsed_whole_hours_clamps_inverted_inputs() {
        let a = ts("2025-01-20T14:00:00Z");
        let b = ts("2025-01-19T22:45:00Z");
        assert_eq!(elapsed_whole_hours(a, b), 0);
    }

    #[test]
    fn test_group_counts() {
        let values = ["a", "b", "a", "c", "a", "b"];
        let counts = group_counts(&values, |v| *v);
        assert_eq!(counts.get("a"), Some(&3));
        assert_eq!(counts.get("b"), Some(&2));
        assert_eq!(counts.get("c"), Some(&1));
        assert_eq!(counts.len(), 3);
    }

    #[test]
    fn test_share() {
        assert_eq!(share(1, 4), Some(25.0));
        assert_eq!(share(0, 4), Some(0.0));
        assert_eq!(share(3, 0), None);
    }

    proptest! {
        #[test]
        fn prop_mean_matches_sum_over_len(values in prop::collection::vec(-1e6_f64..1e6, 1..100)) {
            let expected: f64 = values.iter().sum::<f64>() / values.len() as f64;
            let actual = mean(&values, |v| *v).unwrap();
            prop_assert!((actual - expected).abs() < 1e-6);
        }

        #[test]
        fn prop_disjoint_partition_counts_cover_collection(values in prop::collection::vec(0_u32..1000, 0..100)) {
            // Partition by residue class; the partition is disjoint and covering
            let c0 = count_where(&values, |v| v % 3 == 0);
            let c1 = count_where(&values, |v| v % 3 == 1);
            let c2 = count_where(&values, |v| v % 3 == 2);
            prop_assert_eq!(c0 + c1 + c2, values.len());
        }

        #[test]
        fn prop_group_counts_total_equals_len(values in prop::collection::vec(0_u8..5, 0..100)) {
            let counts = group_counts(&values, |v| *v);
            let total: usize = counts.values().sum();
            prop_assert_eq!(total, values.len());
        }

        #[test]
        fn prop_elapsed_hours_never_negative(a in 0_i64..4_000_000_000, b in 0_i64..4_000_000_000) {
            let start = DateTime::<Utc>::from_timestamp(a, 0).unwrap();
            let end = DateTime::<Utc>::from_timestamp(b, 0).unwrap();
            let hours = elapsed_whole_hours(start, end);
            if b >= a {
                prop_assert_eq!(hours, ((b - a) / 3600) as u64);
            } else {
                prop_assert_eq!(hours, 0);
            }
        }
    }
}
