//! Differential tests against simple, obviously-correct references.
//!
//! `oracle_layout` builds the median-first arrangement by direct recursion and
//! `reference_search` is a textbook binary search over the sorted keys. The
//! in-place, iterative implementations must agree with both.

use crate::common::{keys_and_absent, oracle_layout, reference_search, sorted_keys};
use proptest::prelude::*;
use shufsearch::{deshuffle, search, shuffle};

proptest! {
    #[test]
    fn prop_shuffle_matches_oracle_layout(sorted in sorted_keys(800)) {
        let mut data = sorted.clone();
        shuffle(&mut data);
        prop_assert_eq!(data, oracle_layout(&sorted));
    }

    #[test]
    fn prop_search_matches_reference((sorted, absent) in keys_and_absent(500)) {
        let mut data = sorted.clone();
        shuffle(&mut data);
        let len = data.len();
        for key in sorted.iter().copied().chain([absent]) {
            prop_assert_eq!(
                deshuffle(search(&data, &key), len),
                reference_search(&sorted, &key),
                "key {}", key
            );
        }
    }
}

#[test]
fn test_oracle_on_every_length_up_to_1024() {
    for len in 0..=1024u32 {
        let sorted: Vec<u32> = (0..len).collect();
        let mut data = sorted.clone();
        shuffle(&mut data);
        assert_eq!(data, oracle_layout(&sorted), "len {}", len);
        for key in &sorted {
            assert_eq!(
                deshuffle(search(&data, key), data.len()),
                reference_search(&sorted, key)
            );
        }
        assert_eq!(search(&data, &len), None);
    }
}
