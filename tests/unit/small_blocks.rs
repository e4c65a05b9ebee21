//! Layouts for every small block length, and the search walk across them.

use crate::common::digits;
use shufsearch::{probes, search, shuffle, unshuffle, SMALL_BLOCK_LIMIT};
use std::cmp::Ordering;

/// Shuffled layouts of `0..n` for n = 1..=10.
const LAYOUTS: [&str; 10] = [
    "0",
    "10",
    "102",
    "2103",
    "21043",
    "310254",
    "3102546",
    "42103657",
    "421037658",
    "5210438769",
];

#[test]
fn test_documented_layouts() {
    assert_eq!(LAYOUTS.len(), SMALL_BLOCK_LIMIT);
    for (index, layout) in LAYOUTS.iter().enumerate() {
        let len = index + 1;
        let mut data: Vec<usize> = (0..len).collect();
        shuffle(&mut data);
        assert_eq!(data, digits(layout), "len {}", len);
        unshuffle(&mut data);
        assert_eq!(data, (0..len).collect::<Vec<_>>(), "len {}", len);
    }
}

#[test]
fn test_empty_and_single() {
    let mut empty: [u8; 0] = [];
    shuffle(&mut empty);
    unshuffle(&mut empty);

    let mut one = [42];
    shuffle(&mut one);
    assert_eq!(one, [42]);
    assert_eq!(search(&one, &42), Some(0));
    assert_eq!(search(&one, &41), None);
}

#[test]
fn test_every_small_key_found() {
    for layout in LAYOUTS {
        let data = digits(layout);
        for key in 0..data.len() {
            let position = search(&data, &key);
            assert_eq!(position.map(|p| data[p]), Some(key), "layout {}", layout);
        }
        assert_eq!(search(&data, &data.len()), None);
    }
}

#[test]
fn test_probe_trail_for_ten() {
    let data = digits("5210438769");
    let trail: Vec<(usize, Ordering)> = probes(&data, &7)
        .map(|probe| (probe.position, probe.ordering))
        .collect();
    // 5 < 7 jumps to the upper block at 6; 8 > 7 steps to 7; 7 matches.
    assert_eq!(
        trail,
        vec![(0, Ordering::Less), (6, Ordering::Greater), (7, Ordering::Equal)]
    );
}
