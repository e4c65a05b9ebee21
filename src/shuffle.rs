// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Forward transform: sorted order to median-first layout, in place.
//!
//! # Algorithm
//!
//! ```text
//! block of len n (sorted)        after one general step
//! ┌──────────────┬───┬───────┐   ┌───┬──────────────┬───────┐
//! │ lower (n/2)  │ m │ upper │ → │ m │ lower (n/2)  │ upper │
//! └──────────────┴───┴───────┘   └───┴──────────────┴───────┘
//!                                      continue here  defer
//! ```
//!
//! Moving the median to the front is a one-slot right rotation of the first
//! `n/2 + 1` elements. The lower block is processed next; the upper block goes
//! on the work list. Blocks of length <= `SMALL_BLOCK_LIMIT` are finished with
//! a table of swaps instead.
//!
//! # Complexity
//!
//! - Time: O(n log n) element moves (each level rotates half its block)
//! - Space: O(1), a fixed array of `usize::BITS + 1` block descriptors

use crate::layout::{shuffle_small, Block, Paired, Permutable, WorkList, SMALL_BLOCK_LIMIT};
use crate::verify::contracts::{check_sorted_input, check_work_list_depth};
use crate::verify::LayoutError;

/// Shuffle a sorted slice into the median-first search layout.
///
/// ```
/// let mut values = [0, 1, 2, 3, 4];
/// shufsearch::shuffle(&mut values);
/// assert_eq!(values, [2, 1, 0, 4, 3]);
/// ```
pub fn shuffle<T: Ord>(region: &mut [T]) {
    check_sorted_input(region);
    shuffle_region(region);
}

/// Shuffle `keys` (sorted) and move `values` in lockstep with them.
pub fn shuffle_pairs<K: Ord, V>(keys: &mut [K], values: &mut [V]) -> Result<(), LayoutError> {
    check_sorted_input(keys);
    let mut paired = Paired::new(keys, values)?;
    shuffle_region(&mut paired);
    Ok(())
}

/// Shuffle any permutable region. The caller guarantees it is sorted.
pub fn shuffle_region<P: Permutable + ?Sized>(region: &mut P) {
    let len = region.slot_count();
    let high_water = shuffle_with_limit(region, SMALL_BLOCK_LIMIT);
    check_work_list_depth(high_water, len);
}

/// Forward transform with a configurable table cut-over.
///
/// `table_limit` of 1 forces the general step for every block of length >= 2,
/// which is how the tables are checked against it. Returns the work-list high
/// water mark.
pub(crate) fn shuffle_with_limit<P: Permutable + ?Sized>(region: &mut P, table_limit: usize) -> usize {
    let table_limit = table_limit.clamp(1, SMALL_BLOCK_LIMIT);
    let mut pending = WorkList::new();
    let mut current = Some(Block::new(0, region.slot_count()));

    while let Some(block) = current.take().or_else(|| pending.pop()) {
        if block.len <= table_limit {
            shuffle_small(region, block.start, block.len);
            continue;
        }
        region.rotate_run_right(block.start, block.len / 2 + 1);
        pending.push(block.upper());
        current = Some(block.lower());
    }

    pending.high_water()
}
