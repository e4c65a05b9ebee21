// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Translation between shuffled positions and sorted ranks.
//!
//! Both directions replay the search descent on positions alone, without
//! touching memory, in O(log n) steps. This lets a caller keep a value array
//! in sorted order while its keys live in the shuffled layout:
//!
//! ```
//! use shufsearch::{deshuffle_index, search, shuffle};
//!
//! let names = ["ant", "bee", "cat", "dog", "eel"]; // sorted, never moved
//! let mut keys = [1, 2, 3, 4, 5];
//! shuffle(&mut keys);
//!
//! let rank = search(&keys, &4).and_then(|p| deshuffle_index(p, keys.len()));
//! assert_eq!(rank.map(|r| names[r]), Some("dog"));
//! ```

use crate::verify::contracts::check_rank_in_range;

/// Map a shuffled position to its sorted rank.
///
/// Returns `None` when `position >= count`.
///
/// Walks down from the root block: each step either drops into the lower
/// block (one slot right of the median) or jumps past the lower block into
/// the upper one, adjusting the candidate rank by the new block's median.
pub fn deshuffle_index(position: usize, count: usize) -> Option<usize> {
    if position >= count {
        return None;
    }

    let mut target = position;
    let mut len = count;
    let mut median = len / 2;
    let mut rank = median;

    while target != 0 {
        if target > median {
            target -= median + 1;
            len = (len - 1) / 2;
            rank += 1;
        } else {
            target -= 1;
            len = median;
            rank -= median;
        }
        median = len / 2;
        rank += median;
    }

    check_rank_in_range(rank, count);
    Some(rank)
}

/// [`deshuffle_index`] for a search result: `None` stays `None`.
#[inline]
pub fn deshuffle(position: Option<usize>, count: usize) -> Option<usize> {
    position.and_then(|position| deshuffle_index(position, count))
}

/// Map a sorted rank to its shuffled position. Inverse of [`deshuffle_index`].
///
/// Returns `None` when `rank >= count`.
pub fn shuffle_index(rank: usize, count: usize) -> Option<usize> {
    if rank >= count {
        return None;
    }

    let mut position = 0;
    let mut remaining = count;
    let mut base = 0;

    loop {
        let median = base + remaining / 2;
        match rank.cmp(&median) {
            std::cmp::Ordering::Equal => break,
            std::cmp::Ordering::Greater => {
                position += remaining / 2 + 1;
                base = median + 1;
                remaining = (remaining - 1) / 2;
            }
            std::cmp::Ordering::Less => {
                position += 1;
                remaining /= 2;
            }
        }
    }

    check_rank_in_range(position, count);
    Some(position)
}
