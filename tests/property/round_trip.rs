//! Shuffle and unshuffle are inverse permutations.

use crate::common::{assert_layout, shuffled, sorted_keys, sorted_keys_with_duplicates};
use proptest::prelude::*;
use shufsearch::{check_sorted, shuffle, shuffle_region, unshuffle, unshuffle_region};

proptest! {
    #[test]
    fn prop_unshuffle_restores_sorted(sorted in sorted_keys(600)) {
        let mut data = shuffled(&sorted);
        unshuffle(&mut data);
        prop_assert_eq!(data, sorted);
    }

    #[test]
    fn prop_shuffle_output_is_valid_layout(sorted in sorted_keys(600)) {
        assert_layout(&shuffled(&sorted));
    }

    #[test]
    fn prop_round_trip_with_duplicates(sorted in sorted_keys_with_duplicates(200)) {
        let mut data = sorted.clone();
        shuffle(&mut data);
        unshuffle(&mut data);
        prop_assert!(check_sorted(&data).is_ok());
        prop_assert_eq!(data, sorted);
    }

    #[test]
    fn prop_shuffle_is_a_permutation(sorted in sorted_keys(300)) {
        let mut data = shuffled(&sorted);
        data.sort_unstable();
        prop_assert_eq!(data, sorted);
    }

    #[test]
    fn prop_region_entry_points_agree(sorted in sorted_keys(300)) {
        let mut by_slice = sorted.clone();
        let mut by_region = sorted.clone();
        shuffle(&mut by_slice);
        shuffle_region(by_region.as_mut_slice());
        prop_assert_eq!(&by_slice, &by_region);

        unshuffle_region(by_region.as_mut_slice());
        prop_assert_eq!(by_region, sorted);
    }
}

// ============================================================================
// LARGE LENGTHS
// ============================================================================

#[test]
fn test_round_trip_large() {
    for len in [1_000usize, 4_095, 4_096, 4_097, 65_537] {
        let sorted: Vec<u32> = (0..len as u32).collect();
        let mut data = sorted.clone();
        shuffle(&mut data);
        assert_eq!(data[0], (len / 2) as u32, "root must be the median");
        unshuffle(&mut data);
        assert_eq!(data, sorted, "len {}", len);
    }
}

#[test]
fn test_round_trip_strings() {
    let mut words = vec!["ant", "bee", "cat", "dog", "eel", "fox", "gnu"];
    let sorted = words.clone();
    shuffle(&mut words);
    assert_eq!(words, ["dog", "bee", "ant", "cat", "fox", "eel", "gnu"]);
    unshuffle(&mut words);
    assert_eq!(words, sorted);
}
