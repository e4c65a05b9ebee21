// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error type and layout validators.
//!
//! The transforms trust their input: a shuffle of unsorted data produces
//! garbage, and an unshuffle of a region that was never shuffled does too.
//! These validators are how callers (and the `Sequence` constructors) find out
//! before that happens.
//!
//! | Check            | Guarantees                                        |
//! |------------------|---------------------------------------------------|
//! | `check_sorted`   | `region[i - 1] <= region[i]` for every `i`        |
//! | `check_shuffled` | every block is median-first, recursively          |

use std::fmt;

use crate::layout::Block;
use crate::sequence::Layout;

/// Error type for layout and capacity violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// Insert needs one spare slot and the buffer has none.
    CapacityExceeded { len: usize, capacity: usize },
    /// Key and value slices must be permuted together, so their lengths match.
    LengthMismatch { keys: usize, values: usize },
    /// Logical length is larger than the storage that backs it.
    LengthOutOfRange { len: usize, capacity: usize },
    /// `region[position - 1] > region[position]`.
    NotSorted { position: usize },
    /// The element at `position` is out of order for its block.
    NotShuffled { position: usize },
    /// Operation needs a different layout than the sequence currently has.
    WrongLayout { expected: Layout, found: Layout },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::CapacityExceeded { len, capacity } => {
                write!(
                    f,
                    "no spare slot for insert: len {} == capacity {}",
                    len, capacity
                )
            }
            LayoutError::LengthMismatch { keys, values } => {
                write!(f, "keys.len() {} != values.len() {}", keys, values)
            }
            LayoutError::LengthOutOfRange { len, capacity } => {
                write!(f, "len {} > capacity {}", len, capacity)
            }
            LayoutError::NotSorted { position } => {
                write!(f, "region not sorted at position {}", position)
            }
            LayoutError::NotShuffled { position } => {
                write!(f, "region not in shuffled layout at position {}", position)
            }
            LayoutError::WrongLayout { expected, found } => {
                write!(f, "expected {} layout, found {}", expected, found)
            }
        }
    }
}

impl std::error::Error for LayoutError {}

/// Check that `region` is in ascending order. Equal neighbours are allowed.
pub fn check_sorted<T: Ord>(region: &[T]) -> Result<(), LayoutError> {
    match region.windows(2).position(|pair| pair[0] > pair[1]) {
        Some(i) => Err(LayoutError::NotSorted { position: i + 1 }),
        None => Ok(()),
    }
}

/// Check that `region` is exactly the shuffled layout of its sorted order.
///
/// Walks every block with the bounds inherited from its ancestors: each
/// median must lie between them, its lower block below it and its upper block
/// above it. Block shapes depend only on length, so in-order traversal being
/// sorted is the whole invariant. O(n) comparisons.
pub fn check_shuffled<T: Ord>(region: &[T]) -> Result<(), LayoutError> {
    let mut pending: Vec<(Block, Option<&T>, Option<&T>)> = Vec::new();
    pending.push((Block::new(0, region.len()), None, None));

    while let Some((block, low, high)) = pending.pop() {
        if block.len == 0 {
            continue;
        }
        let median = &region[block.start];
        let above_low = low.map_or(true, |low| low <= median);
        let below_high = high.map_or(true, |high| median <= high);
        if !(above_low && below_high) {
            return Err(LayoutError::NotShuffled {
                position: block.start,
            });
        }
        pending.push((block.upper(), Some(median), high));
        pending.push((block.lower(), low, Some(median)));
    }

    Ok(())
}
