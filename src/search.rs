// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search over the median-first layout.
//!
//! The descent mirrors a classic binary search, but the candidate for the next
//! comparison is always ahead of the current one:
//!
//! ```text
//!  pos:    0   1   2   3   4
//!        ┌───┬───┬───┬───┬───┐
//!        │ 2 │ 1 │ 0 │ 4 │ 3 │
//!        └───┴───┴───┴───┴───┘
//!          │   ▲       ▲
//!          │   └ less: pos + 1
//!          └──── greater: pos + remaining/2 + 1
//! ```
//!
//! The API follows `slice::binary_search*`: `Some(position)` of a match in the
//! shuffled slice, `None` if the key is absent. With duplicate keys, which
//! matching position comes back is unspecified.

use std::cmp::Ordering;

/// Find `key` in a shuffled slice.
///
/// ```
/// assert_eq!(shufsearch::search(&[2, 1, 0, 4, 3], &3), Some(4));
/// assert_eq!(shufsearch::search(&[2, 1, 0, 4, 3], &7), None);
/// ```
pub fn search<T: Ord>(shuffled: &[T], key: &T) -> Option<usize> {
    search_by(shuffled, |probe| probe.cmp(key))
}

/// Search with a comparator that orders each probed element against the
/// target, like [`slice::binary_search_by`].
pub fn search_by<T, F>(shuffled: &[T], mut compare: F) -> Option<usize>
where
    F: FnMut(&T) -> Ordering,
{
    let mut position = 0;
    let mut remaining = shuffled.len();

    while remaining > 0 {
        match compare(&shuffled[position]) {
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

/// Search by a key extracted from each element, like
/// [`slice::binary_search_by_key`].
pub fn search_by_key<T, B, F>(shuffled: &[T], key: &B, mut extract: F) -> Option<usize>
where
    B: Ord,
    F: FnMut(&T) -> B,
{
    search_by(shuffled, |probe| extract(probe).cmp(key))
}

/// One comparison made during a descent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Probe {
    /// Shuffled position that was read.
    pub position: usize,
    /// Ordering of the element at `position` relative to the key.
    pub ordering: Ordering,
}

/// Iterator over the probes a search for one key performs.
///
/// Positions are strictly increasing; the last probe is `Equal` if the key was
/// found.
#[derive(Debug, Clone)]
pub struct Probes<'a, T, K: ?Sized> {
    shuffled: &'a [T],
    key: &'a K,
    position: usize,
    remaining: usize,
}

/// Trace the descent [`search`] would take for `key`.
///
/// ```
/// let trail: Vec<usize> = shufsearch::probes(&[2, 1, 0, 4, 3], &3)
///     .map(|probe| probe.position)
///     .collect();
/// assert_eq!(trail, [0, 3, 4]);
/// ```
pub fn probes<'a, T: Ord>(shuffled: &'a [T], key: &'a T) -> Probes<'a, T, T> {
    Probes {
        shuffled,
        key,
        position: 0,
        remaining: shuffled.len(),
    }
}

impl<T: Ord> Iterator for Probes<'_, T, T> {
    type Item = Probe;

    fn next(&mut self) -> Option<Probe> {
        if self.remaining == 0 {
            return None;
        }
        let position = self.position;
        let ordering = self.shuffled[position].cmp(self.key);
        match ordering {
            Ordering::Equal => self.remaining = 0,
            Ordering::Less => {
                self.position += self.remaining / 2 + 1;
                self.remaining = (self.remaining - 1) / 2;
            }
            Ordering::Greater => {
                self.position += 1;
                self.remaining /= 2;
            }
        }
        Some(Probe { position, ordering })
    }
}
