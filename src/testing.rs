//! Test utilities shared across unit, integration and fuzz tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides the plain implementations the optimized code is checked
//! against, so every suite compares with the same ground truth.

#![doc(hidden)]

use std::cmp::Ordering;

/// Classic binary search over a sorted slice.
///
/// Returns the sorted position of `key`, or `None`. Kept deliberately plain:
/// it is the differential oracle for `search` + `deshuffle_index`.
pub fn reference_search<T: Ord>(sorted: &[T], key: &T) -> Option<usize> {
    let mut first = 0;
    let mut end = sorted.len();
    while first != end {
        let index = (first + end) / 2;
        match key.cmp(&sorted[index]) {
            Ordering::Equal => return Some(index),
            Ordering::Greater => first = index + 1,
            Ordering::Less => end = index,
        }
    }
    None
}

/// Build the median-first layout by direct recursion into a new vector.
///
/// O(n log n) and allocation-heavy, but obviously follows the definition:
/// median first, then the lower half, then the upper half.
pub fn oracle_layout<T: Clone>(sorted: &[T]) -> Vec<T> {
    let mut out = Vec::with_capacity(sorted.len());
    push_layout(sorted, &mut out);
    out
}

fn push_layout<T: Clone>(sorted: &[T], out: &mut Vec<T>) {
    if sorted.is_empty() {
        return;
    }
    let median = sorted.len() / 2;
    out.push(sorted[median].clone());
    push_layout(&sorted[..median], out);
    push_layout(&sorted[median + 1..], out);
}

/// Sorted rank held at each shuffled position, for `len` elements.
pub fn oracle_ranks(len: usize) -> Vec<usize> {
    oracle_layout(&(0..len).collect::<Vec<_>>())
}

/// Sort and deduplicate, the canonical input for the transforms.
pub fn sorted_unique<T: Ord>(mut values: Vec<T>) -> Vec<T> {
    values.sort();
    values.dedup();
    values
}
