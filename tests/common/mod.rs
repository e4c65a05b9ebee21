//! Shared test utilities and strategies.

#![allow(dead_code)]

use proptest::prelude::*;
use shufsearch::{check_shuffled, shuffle};

// Re-export canonical test utilities from shufsearch::testing
pub use shufsearch::testing::{oracle_layout, oracle_ranks, reference_search, sorted_unique};

// ============================================================================
// STRATEGIES
// ============================================================================

/// Strictly increasing keys, up to `max_len` of them.
///
/// Drawn from `i32` and widened so `key ± 1` never overflows.
pub fn sorted_keys(max_len: usize) -> impl Strategy<Value = Vec<i64>> {
    prop::collection::btree_set(any::<i32>(), 0..max_len)
        .prop_map(|set| set.into_iter().map(i64::from).collect())
}

/// Sorted keys that may repeat.
pub fn sorted_keys_with_duplicates(max_len: usize) -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(0i64..16, 0..max_len).prop_map(|mut keys| {
        keys.sort_unstable();
        keys
    })
}

/// Sorted keys plus one key known to be absent from them.
pub fn keys_and_absent(max_len: usize) -> impl Strategy<Value = (Vec<i64>, i64)> {
    (sorted_keys(max_len), any::<i32>()).prop_map(|(keys, probe)| {
        let mut absent = i64::from(probe);
        while keys.binary_search(&absent).is_ok() {
            absent += 1;
        }
        (keys, absent)
    })
}

/// Non-empty sorted keys plus the index of one of them.
pub fn keys_and_member(max_len: usize) -> impl Strategy<Value = (Vec<i64>, usize)> {
    sorted_keys(max_len)
        .prop_filter("need at least one key", |keys| !keys.is_empty())
        .prop_flat_map(|keys| {
            let len = keys.len();
            (Just(keys), 0..len)
        })
}

// ============================================================================
// HELPERS
// ============================================================================

/// A shuffled copy of sorted keys.
pub fn shuffled(sorted: &[i64]) -> Vec<i64> {
    let mut data = sorted.to_vec();
    shuffle(&mut data);
    data
}

/// Panics with the validator's message if `data` is not a valid layout.
pub fn assert_layout(data: &[i64]) {
    if let Err(err) = check_shuffled(data) {
        panic!("invalid layout {:?}: {}", data, err);
    }
}

/// Parse a layout written as a digit string, e.g. "21043".
pub fn digits(layout: &str) -> Vec<usize> {
    layout
        .chars()
        .map(|c| c.to_digit(10).expect("digit") as usize)
        .collect()
}
