// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Building blocks shared by the forward and inverse transforms.
//!
//! Three pieces live here:
//!
//! 1. **`Permutable`**: the only operations the transforms need from a region.
//!    Swap two slots, and rotate a contiguous run by one. Slices implement it
//!    directly; [`Paired`] implements it for a key slice and a value slice that
//!    must move together.
//!
//! 2. **Small-block tables**: exact move lists for blocks of length 0..=10.
//!    The inverse direction replays the same list backwards, so the two
//!    directions come from one table and cannot drift apart.
//!
//! 3. **`WorkList`**: a fixed-size stack of deferred blocks. One entry is
//!    pushed per general step and the current block at least halves each time,
//!    so `usize::BITS + 1` entries cover every representable length.
//!
//! # Median-first layout
//!
//! ```text
//! sorted:    0 1 2 3 4 5 6 7 8 9
//!                      │
//! shuffled:  5 │ 2 1 0 4 3 │ 8 7 6 9
//!            ▲   lower (5)   upper (4)
//!          median
//! ```

use serde::{Deserialize, Serialize};

use crate::verify::LayoutError;

/// Largest block length handled by a table instead of the general step.
pub const SMALL_BLOCK_LIMIT: usize = 10;

/// Work-list capacity. A block of length `n` defers at most `log2(n)` siblings.
pub const WORK_LIST_CAPACITY: usize = usize::BITS as usize + 1;

// ============================================================================
// PERMUTABLE REGIONS
// ============================================================================

/// A region whose elements can be rearranged in place.
///
/// The transforms never read element values; they only move them. Anything
/// that can swap two slots and rotate a run can therefore be shuffled, which is
/// how a key array and a value array are kept in lockstep.
pub trait Permutable {
    /// Number of slots in the region.
    fn slot_count(&self) -> usize;

    /// Swap the elements at `i` and `j`.
    fn swap_two(&mut self, i: usize, j: usize);

    /// Rotate `[start, start + len)` one slot toward higher addresses.
    ///
    /// The last element of the run ends up at `start`.
    fn rotate_run_right(&mut self, start: usize, len: usize);

    /// Rotate `[start, start + len)` one slot toward lower addresses.
    ///
    /// The element at `start` ends up at the end of the run.
    fn rotate_run_left(&mut self, start: usize, len: usize);
}

impl<T> Permutable for [T] {
    #[inline]
    fn slot_count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn swap_two(&mut self, i: usize, j: usize) {
        self.swap(i, j);
    }

    #[inline]
    fn rotate_run_right(&mut self, start: usize, len: usize) {
        self[start..start + len].rotate_right(1);
    }

    #[inline]
    fn rotate_run_left(&mut self, start: usize, len: usize) {
        self[start..start + len].rotate_left(1);
    }
}

/// A key slice and a value slice permuted together.
///
/// Keys drive the search; values ride along. After a shuffle, the value for
/// the key found at shuffled position `p` is `values[p]`.
#[derive(Debug)]
pub struct Paired<'a, K, V> {
    keys: &'a mut [K],
    values: &'a mut [V],
}

impl<'a, K, V> Paired<'a, K, V> {
    /// Couple two slices. Their lengths must match.
    pub fn new(keys: &'a mut [K], values: &'a mut [V]) -> Result<Self, LayoutError> {
        if keys.len() != values.len() {
            return Err(LayoutError::LengthMismatch {
                keys: keys.len(),
                values: values.len(),
            });
        }
        Ok(Self { keys, values })
    }

    pub fn keys(&self) -> &[K] {
        self.keys
    }

    pub fn values(&self) -> &[V] {
        self.values
    }
}

impl<K, V> Permutable for Paired<'_, K, V> {
    #[inline]
    fn slot_count(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    fn swap_two(&mut self, i: usize, j: usize) {
        self.keys.swap(i, j);
        self.values.swap(i, j);
    }

    #[inline]
    fn rotate_run_right(&mut self, start: usize, len: usize) {
        self.keys.rotate_run_right(start, len);
        self.values.rotate_run_right(start, len);
    }

    #[inline]
    fn rotate_run_left(&mut self, start: usize, len: usize) {
        self.keys.rotate_run_left(start, len);
        self.values.rotate_run_left(start, len);
    }
}

// ============================================================================
// SMALL-BLOCK TABLES
// ============================================================================

/// One elementary rearrangement inside a block, relative to the block start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    /// Exchange two slots.
    Swap(usize, usize),
    /// `a` takes the element from `b`, `b` takes it from `c`, `c` takes the
    /// element that was at `a`.
    Cycle(usize, usize, usize),
}

impl Move {
    /// The move that undoes this one.
    pub const fn inverse(self) -> Self {
        match self {
            Move::Swap(a, b) => Move::Swap(a, b),
            Move::Cycle(a, b, c) => Move::Cycle(a, c, b),
        }
    }

    #[inline]
    fn apply<P: Permutable + ?Sized>(self, region: &mut P, base: usize) {
        match self {
            Move::Swap(a, b) => region.swap_two(base + a, base + b),
            Move::Cycle(a, b, c) => {
                region.swap_two(base + a, base + b);
                region.swap_two(base + b, base + c);
            }
        }
    }
}

/// Forward move lists, indexed by block length.
///
/// ```text
/// len  sorted        shuffled
///  2   01         => 10
///  3   012        => 102
///  4   0123       => 2103
///  5   01234      => 21043
///  6   012345     => 310254
///  7   0123456    => 3102546
///  8   01234567   => 42103657
///  9   012345678  => 421037658
/// 10   0123456789 => 5210438769
/// ```
pub const SMALL_BLOCKS: [&[Move]; SMALL_BLOCK_LIMIT + 1] = [
    &[],
    &[],
    &[Move::Swap(0, 1)],
    &[Move::Swap(0, 1)],
    &[Move::Swap(0, 2)],
    &[Move::Swap(0, 2), Move::Swap(3, 4)],
    &[Move::Cycle(0, 3, 2), Move::Swap(4, 5)],
    &[Move::Cycle(0, 3, 2), Move::Swap(4, 5)],
    &[Move::Cycle(0, 4, 3), Move::Swap(1, 2), Move::Swap(5, 6)],
    &[Move::Cycle(0, 4, 3), Move::Swap(1, 2), Move::Swap(5, 7)],
    &[Move::Cycle(0, 5, 3), Move::Swap(1, 2), Move::Swap(6, 8)],
];

/// Rearrange a sorted block of length `len <= SMALL_BLOCK_LIMIT` at `base`.
#[inline]
pub(crate) fn shuffle_small<P: Permutable + ?Sized>(region: &mut P, base: usize, len: usize) {
    for &step in SMALL_BLOCKS[len] {
        step.apply(region, base);
    }
}

/// Undo [`shuffle_small`]: replay the inverse moves in reverse order.
#[inline]
pub(crate) fn unshuffle_small<P: Permutable + ?Sized>(region: &mut P, base: usize, len: usize) {
    for &step in SMALL_BLOCKS[len].iter().rev() {
        step.inverse().apply(region, base);
    }
}

// ============================================================================
// WORK LIST
// ============================================================================

/// A contiguous block awaiting a transform pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub start: usize,
    pub len: usize,
}

impl Block {
    pub const fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// Lower sub-block once the median sits in front of it.
    pub const fn lower(self) -> Self {
        Self::new(self.start + 1, self.len / 2)
    }

    /// Upper sub-block, following the median and the lower sub-block.
    pub const fn upper(self) -> Self {
        Self::new(self.start + 1 + self.len / 2, self.len.saturating_sub(1) / 2)
    }
}

/// Fixed-capacity stack of deferred blocks. Never allocates.
#[derive(Debug)]
pub(crate) struct WorkList {
    entries: [Block; WORK_LIST_CAPACITY],
    depth: usize,
    high_water: usize,
}

impl WorkList {
    pub(crate) fn new() -> Self {
        Self {
            entries: [Block::default(); WORK_LIST_CAPACITY],
            depth: 0,
            high_water: 0,
        }
    }

    /// Defer a block. Blocks of length 0 or 1 need no work and are dropped.
    #[inline]
    pub(crate) fn push(&mut self, block: Block) {
        if block.len <= 1 {
            return;
        }
        // Indexing panics on overflow, which the halving argument rules out.
        self.entries[self.depth] = block;
        self.depth += 1;
        self.high_water = self.high_water.max(self.depth);
    }

    #[inline]
    pub(crate) fn pop(&mut self) -> Option<Block> {
        self.depth = self.depth.checked_sub(1)?;
        Some(self.entries[self.depth])
    }

    /// Deepest the stack has been since creation.
    pub(crate) fn high_water(&self) -> usize {
        self.high_water
    }
}
