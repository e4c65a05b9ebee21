//! The typed `Sequence` handle.

use shufsearch::{Layout, LayoutError, Mutation, Sequence};

#[test]
fn test_from_sorted_rejects_unsorted() {
    let mut storage = [1, 3, 2];
    let err = Sequence::from_sorted(&mut storage, 3).unwrap_err();
    assert_eq!(err, LayoutError::NotSorted { position: 2 });
}

#[test]
fn test_from_shuffled_rejects_sorted() {
    let mut storage = [0, 1, 2, 3, 4];
    assert!(matches!(
        Sequence::from_shuffled(&mut storage, 5),
        Err(LayoutError::NotShuffled { .. })
    ));
}

#[test]
fn test_len_past_storage_rejected() {
    let mut storage = [1, 2];
    assert_eq!(
        Sequence::from_sorted(&mut storage, 3).unwrap_err(),
        LayoutError::LengthOutOfRange { len: 3, capacity: 2 }
    );
}

#[test]
fn test_position_requires_shuffled_layout() {
    let mut storage = [0, 1, 2, 3, 4];
    let mut seq = Sequence::from_sorted(&mut storage, 5).unwrap();
    assert_eq!(
        seq.position(&3),
        Err(LayoutError::WrongLayout {
            expected: Layout::Shuffled,
            found: Layout::Sorted,
        })
    );

    seq.shuffle();
    assert_eq!(seq.position(&3), Ok(Some(4)));
    assert_eq!(seq.as_slice(), &[2, 1, 0, 4, 3]);
}

#[test]
fn test_rank_in_both_layouts() {
    let mut storage = [10, 20, 30, 40, 50, 60, 70];
    let mut seq = Sequence::from_sorted(&mut storage, 7).unwrap();
    for (rank, key) in [10, 20, 30, 40, 50, 60, 70].iter().enumerate() {
        assert_eq!(seq.rank(key), Some(rank));
    }
    seq.shuffle();
    for (rank, key) in [10, 20, 30, 40, 50, 60, 70].iter().enumerate() {
        assert_eq!(seq.rank(key), Some(rank));
    }
    assert!(!seq.contains(&35));
}

#[test]
fn test_shuffle_and_unshuffle_are_idempotent() {
    let mut storage = [1, 2, 3, 4];
    let mut seq = Sequence::from_sorted(&mut storage, 4).unwrap();
    seq.shuffle();
    seq.shuffle();
    assert_eq!(seq.as_slice(), &[3, 2, 1, 4]);
    seq.unshuffle();
    seq.unshuffle();
    assert_eq!(seq.as_slice(), &[1, 2, 3, 4]);
    assert_eq!(seq.layout(), Layout::Sorted);
}

#[test]
fn test_mutations_from_sorted_state() {
    let mut storage = [1, 3, 5, 0, 0];
    let mut seq = Sequence::from_sorted(&mut storage, 3).unwrap();
    assert_eq!(seq.capacity(), 5);

    assert_eq!(seq.insert(4), Ok(Mutation::Changed { len: 4 }));
    assert_eq!(seq.layout(), Layout::Shuffled);
    assert_eq!(seq.insert(4), Ok(Mutation::Unchanged { len: 4 }));
    assert_eq!(seq.insert(2), Ok(Mutation::Changed { len: 5 }));
    assert_eq!(
        seq.insert(9),
        Err(LayoutError::CapacityExceeded { len: 5, capacity: 5 })
    );

    assert_eq!(seq.remove(&1), Mutation::Changed { len: 4 });
    assert_eq!(seq.remove(&1), Mutation::Unchanged { len: 4 });
    assert!(!seq.remove(&7).is_changed());

    seq.unshuffle();
    assert_eq!(seq.as_slice(), &[2, 3, 4, 5]);

    let (storage, len, layout) = seq.into_parts();
    assert_eq!((len, layout), (4, Layout::Sorted));
    assert_eq!(storage[4], 1);
}

#[test]
fn test_empty_sequence() {
    let mut storage: [u32; 2] = [0, 0];
    let mut seq = Sequence::from_shuffled(&mut storage, 0).unwrap();
    assert!(seq.is_empty());
    assert_eq!(seq.rank(&0), None);
    assert_eq!(seq.insert(7), Ok(Mutation::Changed { len: 1 }));
    assert_eq!(seq.len(), 1);
    assert_eq!(seq.position(&7), Ok(Some(0)));
}
