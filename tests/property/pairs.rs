//! Keys and values shuffled in lockstep.

use crate::common::sorted_keys;
use proptest::prelude::*;
use shufsearch::{search, shuffle_pairs, shuffle_region, unshuffle_pairs, unshuffle_region, LayoutError, Paired};

proptest! {
    #[test]
    fn prop_values_follow_keys(sorted in sorted_keys(400)) {
        let mut keys = sorted.clone();
        let mut values: Vec<String> = sorted.iter().map(|k| format!("v{}", k)).collect();
        prop_assert!(shuffle_pairs(&mut keys, &mut values).is_ok());

        for key in &sorted {
            let position = search(&keys, key);
            let expected = format!("v{}", key);
            prop_assert_eq!(position.map(|p| values[p].as_str()), Some(expected.as_str()));
        }

        prop_assert!(unshuffle_pairs(&mut keys, &mut values).is_ok());
        prop_assert_eq!(&keys, &sorted);
        let restored: Vec<String> = sorted.iter().map(|k| format!("v{}", k)).collect();
        prop_assert_eq!(values, restored);
    }
}

#[test]
fn test_mismatched_lengths_rejected() {
    let mut keys = [1, 2, 3];
    let mut values = ['a', 'b'];
    assert_eq!(
        shuffle_pairs(&mut keys, &mut values),
        Err(LayoutError::LengthMismatch { keys: 3, values: 2 })
    );
    assert_eq!(keys, [1, 2, 3]);
    assert_eq!(values, ['a', 'b']);
}

#[test]
fn test_paired_region_directly() {
    let mut keys = [1u8, 2, 3, 4, 5, 6, 7];
    let mut values = [10u16, 20, 30, 40, 50, 60, 70];
    let mut paired = Paired::new(&mut keys, &mut values).unwrap();

    shuffle_region(&mut paired);
    assert_eq!(paired.keys(), &[4, 2, 1, 3, 6, 5, 7]);
    assert_eq!(paired.values(), &[40, 20, 10, 30, 60, 50, 70]);

    unshuffle_region(&mut paired);
    assert_eq!(paired.keys(), &[1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(paired.values(), &[10, 20, 30, 40, 50, 60, 70]);
}
