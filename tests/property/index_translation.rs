//! Translation between shuffled positions and sorted ranks.

use crate::common::{oracle_ranks, shuffled, sorted_keys};
use proptest::prelude::*;
use shufsearch::{deshuffle, deshuffle_index, search, shuffle_index};

proptest! {
    #[test]
    fn prop_search_then_deshuffle_gives_rank(sorted in sorted_keys(500)) {
        let data = shuffled(&sorted);
        let len = data.len();
        for (rank, key) in sorted.iter().enumerate() {
            prop_assert_eq!(deshuffle(search(&data, key), len), Some(rank));
        }
    }

    #[test]
    fn prop_out_of_range_is_not_found(count in 0usize..10_000, past in 0usize..1_000) {
        prop_assert_eq!(deshuffle_index(count + past, count), None);
        prop_assert_eq!(shuffle_index(count + past, count), None);
    }

    #[test]
    fn prop_translations_are_inverse(count in 1usize..1_000_000, seed in any::<usize>()) {
        let position = seed % count;
        let rank = deshuffle_index(position, count);
        prop_assert!(rank.is_some_and(|r| r < count));
        prop_assert_eq!(rank.and_then(|r| shuffle_index(r, count)), Some(position));
    }

    #[test]
    fn prop_deshuffle_matches_layout(count in 0usize..400) {
        let ranks = oracle_ranks(count);
        for (position, rank) in ranks.into_iter().enumerate() {
            prop_assert_eq!(deshuffle_index(position, count), Some(rank));
            prop_assert_eq!(shuffle_index(rank, count), Some(position));
        }
    }
}

#[test]
fn test_not_found_composes() {
    assert_eq!(deshuffle(None, 5), None);
    assert_eq!(deshuffle(None, 0), None);
    assert_eq!(deshuffle(Some(0), 0), None);
}

#[test]
fn test_huge_counts() {
    let count = usize::MAX;
    assert_eq!(deshuffle_index(0, count), Some(count / 2));
    assert_eq!(shuffle_index(count / 2, count), Some(0));
    let last = count - 1;
    assert_eq!(deshuffle_index(last, count).and_then(|r| shuffle_index(r, count)), Some(last));
}
