// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A typed handle over caller-owned storage.
//!
//! The free functions trust their caller to know which layout a buffer is in.
//! `Sequence` records it instead. Construction validates the claimed layout
//! once; after that every method knows the state and refuses (or converts)
//! when it does not match.
//!
//! ```
//! use shufsearch::{Layout, Mutation, Sequence};
//!
//! let mut storage = [10, 20, 30, 40, 0, 0];
//! let mut seq = Sequence::from_sorted(&mut storage, 4)?;
//! seq.shuffle();
//! assert_eq!(seq.layout(), Layout::Shuffled);
//! assert_eq!(seq.rank(&30), Some(2));
//!
//! assert_eq!(seq.insert(25)?, Mutation::Changed { len: 5 });
//! assert_eq!(seq.rank(&30), Some(3));
//! # Ok::<(), shufsearch::LayoutError>(())
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::index::deshuffle_index;
use crate::mutation;
use crate::search::search;
use crate::shuffle::shuffle_region;
use crate::unshuffle::unshuffle_region;
use crate::verify::{check_shuffled, check_sorted, LayoutError};

/// Which arrangement the live elements are in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Ascending order.
    Sorted,
    /// Median-first search layout.
    Shuffled,
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layout::Sorted => f.write_str("sorted"),
            Layout::Shuffled => f.write_str("shuffled"),
        }
    }
}

/// Outcome of an insert or remove.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    /// The element was added or removed; `len` is the new length.
    Changed { len: usize },
    /// Insert found a duplicate, or remove found nothing. Storage untouched.
    Unchanged { len: usize },
}

#[allow(clippy::len_without_is_empty)]
impl Mutation {
    pub fn len(self) -> usize {
        match self {
            Mutation::Changed { len } | Mutation::Unchanged { len } => len,
        }
    }

    pub fn is_changed(self) -> bool {
        matches!(self, Mutation::Changed { .. })
    }
}

/// Fixed-capacity sequence over borrowed storage.
///
/// # Invariants (enforced at construction, kept by every method)
/// - `len <= storage.len()`
/// - `storage[..len]` is in the arrangement `layout` says it is
#[derive(Debug)]
pub struct Sequence<'a, T> {
    storage: &'a mut [T],
    len: usize,
    layout: Layout,
}

impl<'a, T: Ord> Sequence<'a, T> {
    /// Wrap storage whose first `len` elements are sorted.
    pub fn from_sorted(storage: &'a mut [T], len: usize) -> Result<Self, LayoutError> {
        Self::check_len(storage, len)?;
        check_sorted(&storage[..len])?;
        Ok(Self {
            storage,
            len,
            layout: Layout::Sorted,
        })
    }

    /// Wrap storage whose first `len` elements are already shuffled.
    pub fn from_shuffled(storage: &'a mut [T], len: usize) -> Result<Self, LayoutError> {
        Self::check_len(storage, len)?;
        check_shuffled(&storage[..len])?;
        Ok(Self {
            storage,
            len,
            layout: Layout::Shuffled,
        })
    }

    fn check_len(storage: &[T], len: usize) -> Result<(), LayoutError> {
        if len > storage.len() {
            return Err(LayoutError::LengthOutOfRange {
                len,
                capacity: storage.len(),
            });
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Live elements in their current arrangement.
    pub fn as_slice(&self) -> &[T] {
        &self.storage[..self.len]
    }

    /// Switch to the search layout. No-op if already shuffled.
    pub fn shuffle(&mut self) {
        if self.layout == Layout::Sorted {
            shuffle_region(&mut self.storage[..self.len]);
            self.layout = Layout::Shuffled;
        }
    }

    /// Switch back to ascending order. No-op if already sorted.
    pub fn unshuffle(&mut self) {
        if self.layout == Layout::Shuffled {
            unshuffle_region(&mut self.storage[..self.len]);
            self.layout = Layout::Sorted;
        }
    }

    /// Shuffled position of `key`. Requires the shuffled layout.
    pub fn position(&self, key: &T) -> Result<Option<usize>, LayoutError> {
        self.expect_layout(Layout::Shuffled)?;
        Ok(search(self.as_slice(), key))
    }

    /// Sorted rank of `key`, in either layout.
    pub fn rank(&self, key: &T) -> Option<usize> {
        match self.layout {
            Layout::Sorted => self.as_slice().binary_search(key).ok(),
            Layout::Shuffled => {
                search(self.as_slice(), key).and_then(|p| deshuffle_index(p, self.len))
            }
        }
    }

    pub fn contains(&self, key: &T) -> bool {
        self.rank(key).is_some()
    }

    /// Insert `key`, leaving the sequence shuffled.
    pub fn insert(&mut self, key: T) -> Result<Mutation, LayoutError> {
        self.shuffle();
        let len = mutation::insert(self.storage, self.len, key)?;
        Ok(self.record(len))
    }

    /// Remove `key`, leaving the sequence shuffled.
    pub fn remove(&mut self, key: &T) -> Mutation {
        self.shuffle();
        let len = mutation::remove(self.storage, self.len, key);
        self.record(len)
    }

    fn record(&mut self, len: usize) -> Mutation {
        if len == self.len {
            Mutation::Unchanged { len }
        } else {
            self.len = len;
            Mutation::Changed { len }
        }
    }

    fn expect_layout(&self, expected: Layout) -> Result<(), LayoutError> {
        if self.layout != expected {
            return Err(LayoutError::WrongLayout {
                expected,
                found: self.layout,
            });
        }
        Ok(())
    }

    /// Release the storage and the live length.
    pub fn into_parts(self) -> (&'a mut [T], usize, Layout) {
        (self.storage, self.len, self.layout)
    }
}
