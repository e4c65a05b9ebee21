// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the shuffle / unshuffle round trip.
//!
//! The fuzzer picks the keys (duplicates included). After sorting them, the
//! shuffled arrangement must pass the layout validator, match the recursive
//! definition, and unshuffle back to exactly the sorted input.

#![no_main]

use libfuzzer_sys::fuzz_target;
use shufsearch::testing::oracle_layout;
use shufsearch::{check_shuffled, shuffle, unshuffle};

fuzz_target!(|keys: Vec<u16>| {
    let mut sorted = keys;
    sorted.sort_unstable();

    let mut data = sorted.clone();
    shuffle(&mut data);

    assert!(
        check_shuffled(&data).is_ok(),
        "shuffle produced an invalid layout for {} keys",
        data.len()
    );
    assert_eq!(data, oracle_layout(&sorted));

    unshuffle(&mut data);
    assert_eq!(data, sorted, "round trip changed the data");
});
