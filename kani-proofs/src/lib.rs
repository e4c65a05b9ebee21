// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for shufsearch position arithmetic.
//!
//! This standalone crate extracts the rank/position translation and the
//! search descent, and proves them for every input in the stated bounds.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **No panics**: deshuffle_index and shuffle_index never overflow
//! 2. **Range**: a returned rank or position is always `< count`
//! 3. **Inverse**: shuffle_index(deshuffle_index(p)) == p
//! 4. **Search**: in a layout of up to MAX_SEARCH_LEN keys, every key is
//!    found at the position shuffle_index assigns to its rank

use std::cmp::Ordering;

/// Largest layout the search proof builds symbolically.
pub const MAX_SEARCH_LEN: usize = 7;

// ============================================================================
// POSITION ARITHMETIC (copied from src/index.rs)
// ============================================================================

/// Map a shuffled position to its sorted rank.
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

    Some(rank)
}

/// Map a sorted rank to its shuffled position.
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
            Ordering::Equal => break,
            Ordering::Greater => {
                position += remaining / 2 + 1;
                base = median + 1;
                remaining = (remaining - 1) / 2;
            }
            Ordering::Less => {
                position += 1;
                remaining /= 2;
            }
        }
    }

    Some(position)
}

// ============================================================================
// SEARCH DESCENT (copied from src/search.rs)
// ============================================================================

/// Position of `key` in a shuffled layout.
pub fn search(shuffled: &[u32], key: u32) -> Option<usize> {
    let mut position = 0;
    let mut remaining = shuffled.len();
    while remaining > 0 {
        match shuffled[position].cmp(&key) {
            Ordering::Equal => return Some(position),
            Ordering::Less => {
                position += remaining / 2 + 1;
                remaining = (remaining - 1) / 2;
            }
            Ordering::Greater => {
                position += 1;
                remaining /= 2;
            }
        }
    }
    None
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Counts up to 2^32 keep the descent within 33 steps.
    const MAX_COUNT: usize = u32::MAX as usize;

    /// Verify deshuffle_index never panics and stays in range.
    #[kani::proof]
    #[kani::unwind(34)]
    fn verify_deshuffle_index_in_range() {
        let count: usize = kani::any_where(|&n| n <= MAX_COUNT);
        let position: usize = kani::any();

        match deshuffle_index(position, count) {
            Some(rank) => kani::assert(rank < count, "rank must be below count"),
            None => kani::assert(position >= count, "None only when out of range"),
        }
    }

    /// Verify shuffle_index never panics and stays in range.
    #[kani::proof]
    #[kani::unwind(34)]
    fn verify_shuffle_index_in_range() {
        let count: usize = kani::any_where(|&n| n <= MAX_COUNT);
        let rank: usize = kani::any();

        match shuffle_index(rank, count) {
            Some(position) => kani::assert(position < count, "position must be below count"),
            None => kani::assert(rank >= count, "None only when out of range"),
        }
    }

    /// Verify the two translations are inverses.
    #[kani::proof]
    #[kani::unwind(34)]
    fn verify_translations_inverse() {
        let count: usize = kani::any_where(|&n| n > 0 && n <= MAX_COUNT);
        let position: usize = kani::any_where(|&p| p < count);

        let rank = deshuffle_index(position, count);
        kani::assert(rank.is_some(), "in-range position must have a rank");
        kani::assert(
            rank.and_then(|r| shuffle_index(r, count)) == Some(position),
            "shuffle_index must undo deshuffle_index",
        );
    }

    /// Verify search finds every key of a symbolic strictly increasing set,
    /// placed by shuffle_index, at exactly that position.
    #[kani::proof]
    #[kani::unwind(9)] // MAX_SEARCH_LEN + 2
    fn verify_search_finds_every_key() {
        let len: usize = kani::any_where(|&n| n <= MAX_SEARCH_LEN);
        let mut sorted = [0u32; MAX_SEARCH_LEN];
        for i in 0..len {
            sorted[i] = kani::any();
            if i > 0 {
                kani::assume(sorted[i - 1] < sorted[i]);
            }
        }

        let mut shuffled = [0u32; MAX_SEARCH_LEN];
        for rank in 0..len {
            if let Some(position) = shuffle_index(rank, len) {
                shuffled[position] = sorted[rank];
            }
        }

        let rank: usize = kani::any_where(|&r| r < len);
        let found = search(&shuffled[..len], sorted[rank]);
        kani::assert(found == shuffle_index(rank, len), "key found at its position");
        kani::assert(
            found.and_then(|p| deshuffle_index(p, len)) == Some(rank),
            "found position translates back to the rank",
        );
    }
}
