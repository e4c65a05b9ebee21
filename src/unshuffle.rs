// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Inverse transform: median-first layout back to sorted order, in place.
//!
//! Mirror image of [`crate::shuffle`]. The median at the front of a block is
//! rotated back behind the lower block, then both sub-blocks are restored.
//! The rotation moves the still-shuffled lower block as one unit, so doing it
//! before the sub-blocks gives the same result as doing it after.
//!
//! ```text
//! ┌───┬──────────────┬───────┐   ┌──────────────┬───┬───────┐
//! │ m │ lower (n/2)  │ upper │ → │ lower (n/2)  │ m │ upper │
//! └───┴──────────────┴───────┘   └──────────────┴───┴───────┘
//!                                  continue here      defer
//! ```

use crate::layout::{unshuffle_small, Block, Paired, Permutable, WorkList, SMALL_BLOCK_LIMIT};
use crate::verify::contracts::{check_shuffled_input, check_work_list_depth};
use crate::verify::LayoutError;

/// Restore a shuffled slice to ascending order.
///
/// ```
/// let mut values = [2, 1, 0, 4, 3];
/// shufsearch::unshuffle(&mut values);
/// assert_eq!(values, [0, 1, 2, 3, 4]);
/// ```
pub fn unshuffle<T: Ord>(region: &mut [T]) {
    check_shuffled_input(region);
    unshuffle_region(region);
}

/// Restore shuffled `keys` to sorted order, moving `values` in lockstep.
pub fn unshuffle_pairs<K: Ord, V>(keys: &mut [K], values: &mut [V]) -> Result<(), LayoutError> {
    check_shuffled_input(keys);
    let mut paired = Paired::new(keys, values)?;
    unshuffle_region(&mut paired);
    Ok(())
}

/// Unshuffle any permutable region. The caller guarantees it is shuffled.
pub fn unshuffle_region<P: Permutable + ?Sized>(region: &mut P) {
    let len = region.slot_count();
    let high_water = unshuffle_with_limit(region, SMALL_BLOCK_LIMIT);
    check_work_list_depth(high_water, len);
}

/// Inverse transform with a configurable table cut-over. See
/// [`crate::shuffle::shuffle_with_limit`].
pub(crate) fn unshuffle_with_limit<P: Permutable + ?Sized>(
    region: &mut P,
    table_limit: usize,
) -> usize {
    let table_limit = table_limit.clamp(1, SMALL_BLOCK_LIMIT);
    let mut pending = WorkList::new();
    let mut current = Some(Block::new(0, region.slot_count()));

    while let Some(block) = current.take().or_else(|| pending.pop()) {
        if block.len <= table_limit {
            unshuffle_small(region, block.start, block.len);
            continue;
        }
        let half = block.len / 2;
        region.rotate_run_left(block.start, half + 1);
        pending.push(block.upper());
        current = Some(Block::new(block.start, half));
    }

    pending.high_water()
}
