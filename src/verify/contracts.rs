// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the transforms and the index arithmetic.
//!
//! Debug-mode assertions that catch precondition violations where they enter
//! the crate, instead of letting a bad layout silently propagate through a
//! mutation. They are:
//!
//! 1. **Zero-cost in release builds** (guarded by `debug_assertions`)
//! 2. **Bounded in debug builds**: the O(n) layout walks only run on regions
//!    up to [`CONTRACT_CHECK_LIMIT`] elements, so large randomized suites stay fast
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function        | Property                                    |
//! |--------------------------|---------------------------------------------|
//! | `check_sorted_input`     | shuffle input is ascending                  |
//! | `check_shuffled_input`   | unshuffle / mutation input is median-first  |
//! | `check_work_list_depth`  | deferred blocks never exceed `log2(n) + 1`  |
//! | `check_rank_in_range`    | translated indices land inside `[0, count)` |

use super::types::{check_shuffled, check_sorted};

/// Largest region the layout contracts will walk.
pub const CONTRACT_CHECK_LIMIT: usize = 4096;

/// Check that a region handed to the forward transform is sorted.
///
/// # Panics (debug builds only)
/// Panics if any adjacent pair is out of order.
#[inline]
pub fn check_sorted_input<T: Ord>(region: &[T]) {
    if cfg!(debug_assertions) && region.len() <= CONTRACT_CHECK_LIMIT {
        if let Err(err) = check_sorted(region) {
            panic!("Contract violation: shuffle input - {}", err);
        }
    }
}

/// Check that a region handed to the inverse transform is shuffled.
///
/// # Panics (debug builds only)
/// Panics if any block is not median-first.
#[inline]
pub fn check_shuffled_input<T: Ord>(region: &[T]) {
    if cfg!(debug_assertions) && region.len() <= CONTRACT_CHECK_LIMIT {
        if let Err(err) = check_shuffled(region) {
            panic!("Contract violation: unshuffle input - {}", err);
        }
    }
}

/// Check that a transform pass stayed within its work-list bound.
///
/// # Panics (debug builds only)
/// Panics if more blocks were deferred at once than `len` has bits.
#[inline]
pub fn check_work_list_depth(high_water: usize, len: usize) {
    let bound = (usize::BITS - len.leading_zeros()) as usize;
    debug_assert!(
        high_water <= bound,
        "Contract violation: work list depth {} exceeds {} for len {}",
        high_water,
        bound,
        len
    );
}

/// Check that an index translation produced a position inside the block.
///
/// # Panics (debug builds only)
/// Panics if `index >= count`.
#[inline]
pub fn check_rank_in_range(index: usize, count: usize) {
    debug_assert!(
        index < count,
        "Contract violation: translated index {} >= count {}",
        index,
        count
    );
}
