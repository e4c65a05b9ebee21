// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search plus rank translation.
//!
//! Differential against a textbook binary search over the sorted keys: for
//! any probe key the two must agree on whether it is present and, when it is,
//! on its sorted rank. Probe positions must strictly increase.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use shufsearch::testing::{reference_search, sorted_unique};
use shufsearch::{deshuffle, probes, search, shuffle};

#[derive(Debug, Arbitrary)]
struct SearchInput {
    keys: Vec<i32>,
    queries: Vec<i32>,
}

fuzz_target!(|input: SearchInput| {
    let sorted = sorted_unique(input.keys);
    let mut data = sorted.clone();
    shuffle(&mut data);
    let len = data.len();

    for query in input.queries.iter().take(64) {
        let rank = deshuffle(search(&data, query), len);
        assert_eq!(rank, reference_search(&sorted, query), "query {}", query);

        let mut last = None;
        for probe in probes(&data, query) {
            assert!(last.map_or(true, |prev| prev < probe.position));
            last = Some(probe.position);
        }
    }
});
