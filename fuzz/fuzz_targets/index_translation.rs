// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for position / rank arithmetic.
//!
//! Pure arithmetic on arbitrary `usize` pairs, including counts near
//! `usize::MAX`: no overflow panics, `None` exactly when out of range, and the
//! two directions must be inverses.

#![no_main]

use libfuzzer_sys::fuzz_target;
use shufsearch::{deshuffle_index, shuffle_index};

fuzz_target!(|input: (usize, usize)| {
    let (position, count) = input;

    match deshuffle_index(position, count) {
        None => assert!(position >= count),
        Some(rank) => {
            assert!(rank < count);
            assert_eq!(shuffle_index(rank, count), Some(position));
        }
    }

    assert_eq!(shuffle_index(position, count).is_none(), position >= count);
});
