//! Insert and remove against a fresh shuffle of the edited key set.

use crate::common::{keys_and_absent, keys_and_member, shuffled, sorted_keys};
use proptest::prelude::*;
use shufsearch::{insert, remove, LayoutError};

proptest! {
    #[test]
    fn prop_insert_matches_fresh_shuffle((sorted, key) in keys_and_absent(300)) {
        let len = sorted.len();
        let mut buffer = shuffled(&sorted);
        buffer.push(0);

        let grown = insert(&mut buffer, len, key);
        prop_assert_eq!(grown, Ok(len + 1));

        let mut expected = sorted.clone();
        let slot = expected.partition_point(|k| *k < key);
        expected.insert(slot, key);
        prop_assert_eq!(buffer, shuffled(&expected));
    }

    #[test]
    fn prop_remove_matches_fresh_shuffle((sorted, index) in keys_and_member(300)) {
        let len = sorted.len();
        let key = sorted[index];
        let mut buffer = shuffled(&sorted);

        let shrunk = remove(&mut buffer, len, &key);
        prop_assert_eq!(shrunk, len - 1);

        let mut expected = sorted.clone();
        expected.remove(index);
        prop_assert_eq!(&buffer[..shrunk], &shuffled(&expected)[..]);
        prop_assert_eq!(buffer[shrunk], key);
    }

    #[test]
    fn prop_insert_existing_is_noop((sorted, index) in keys_and_member(300)) {
        let len = sorted.len();
        let mut buffer = shuffled(&sorted);
        buffer.push(i64::MIN);
        let before = buffer.clone();

        prop_assert_eq!(insert(&mut buffer, len, sorted[index]), Ok(len));
        prop_assert_eq!(buffer, before);
    }

    #[test]
    fn prop_remove_absent_is_noop((sorted, absent) in keys_and_absent(300)) {
        let len = sorted.len();
        let mut buffer = shuffled(&sorted);
        let before = buffer.clone();

        prop_assert_eq!(remove(&mut buffer, len, &absent), len);
        prop_assert_eq!(buffer, before);
    }

    #[test]
    fn prop_insert_when_full_is_rejected((sorted, key) in keys_and_absent(200)) {
        let len = sorted.len();
        let mut buffer = shuffled(&sorted);
        let before = buffer.clone();

        prop_assert_eq!(
            insert(&mut buffer, len, key),
            Err(LayoutError::CapacityExceeded { len, capacity: len })
        );
        prop_assert_eq!(buffer, before);
    }

    #[test]
    fn prop_remove_then_insert_restores((sorted, index) in keys_and_member(300)) {
        let len = sorted.len();
        let key = sorted[index];
        let original = shuffled(&sorted);
        let mut buffer = original.clone();

        let shrunk = remove(&mut buffer, len, &key);
        prop_assert_eq!(insert(&mut buffer, shrunk, key), Ok(len));
        prop_assert_eq!(buffer, original);
    }
}

#[test]
fn test_grow_from_empty() {
    let keys = [5, 3, 9, 1, 7, 2, 8, 6, 4, 0];
    let mut buffer = [0i64; 10];
    let mut len = 0;
    for key in keys {
        len = insert(&mut buffer, len, key).expect("capacity is sufficient");
    }
    assert_eq!(len, 10);
    let expected: Vec<i64> = (0..10).collect();
    assert_eq!(buffer.to_vec(), shuffled(&expected));
}

#[test]
fn test_drain_to_empty() {
    let sorted: Vec<i64> = (0..32).collect();
    let mut buffer = shuffled(&sorted);
    let mut len = buffer.len();
    for key in sorted.iter().rev() {
        len = remove(&mut buffer, len, key);
    }
    assert_eq!(len, 0);
}

#[test]
fn test_len_past_capacity_is_rejected() {
    let mut buffer = [1i64, 2];
    assert_eq!(
        insert(&mut buffer, 3, 0),
        Err(LayoutError::LengthOutOfRange { len: 3, capacity: 2 })
    );
}
