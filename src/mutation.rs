// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Insert and remove on a shuffled buffer.
//!
//! There is no cheap local edit in the median-first layout: adding one
//! element shifts the median of every enclosing block. Both operations
//! therefore go back to sorted order, splice, and shuffle again:
//!
//! ```text
//! search ──▶ unshuffle ──▶ rotate one slot ──▶ shuffle
//!  O(log n)    O(n log n)       O(n)            O(n log n)
//! ```
//!
//! Fine for occasional updates amortized over many lookups. For a write-heavy
//! workload keep the data sorted and use a plain binary search instead.
//!
//! Buffers are caller-owned: `buffer.len()` is the capacity, `len` is the
//! number of live elements at the front. Nothing is allocated or dropped. The
//! element removed from the live range stays in the spare slot at `len - 1`.

use crate::index::deshuffle_index;
use crate::search::search;
use crate::shuffle::shuffle_region;
use crate::unshuffle::unshuffle_region;
use crate::verify::contracts::check_shuffled_input;
use crate::verify::LayoutError;

/// Insert `key` into the shuffled prefix `buffer[..len]`.
///
/// Returns the new length: `len + 1` if the key was added, `len` if it was
/// already present (the buffer is then untouched). Fails without touching the
/// buffer if there is no spare slot, or if `len` exceeds the buffer.
///
/// ```
/// let mut buffer = [2, 1, 0, 4, 3, 0];
/// let len = shufsearch::insert(&mut buffer, 5, 7).unwrap();
/// assert_eq!(len, 6);
/// assert_eq!(buffer, [3, 1, 0, 2, 7, 4]);
/// ```
pub fn insert<T: Ord>(buffer: &mut [T], len: usize, key: T) -> Result<usize, LayoutError> {
    let capacity = buffer.len();
    if len > capacity {
        return Err(LayoutError::LengthOutOfRange { len, capacity });
    }

    let live = &mut buffer[..len];
    check_shuffled_input(live);
    if search(live, &key).is_some() {
        return Ok(len);
    }
    if len == capacity {
        return Err(LayoutError::CapacityExceeded { len, capacity });
    }

    unshuffle_region(live);
    let slot = live.partition_point(|probe| probe < &key);

    buffer[len] = key;
    buffer[slot..=len].rotate_right(1);

    shuffle_region(&mut buffer[..=len]);
    Ok(len + 1)
}

/// Remove `key` from the shuffled prefix `buffer[..len]`.
///
/// Returns the new length: `len - 1` if the key was found, `len` otherwise
/// (the buffer is then untouched). `len` is clamped to the buffer length.
///
/// ```
/// let mut buffer = [2, 1, 0, 4, 3];
/// let len = shufsearch::remove(&mut buffer, 5, &2);
/// assert_eq!(len, 4);
/// assert_eq!(&buffer[..len], &[3, 1, 0, 4]);
/// ```
pub fn remove<T: Ord>(buffer: &mut [T], len: usize, key: &T) -> usize {
    let len = len.min(buffer.len());
    let live = &mut buffer[..len];
    check_shuffled_input(live);

    let Some(position) = search(live, key) else {
        return len;
    };
    let Some(rank) = deshuffle_index(position, len) else {
        return len;
    };

    unshuffle_region(live);
    live[rank..].rotate_left(1);
    shuffle_region(&mut live[..len - 1]);
    len - 1
}
