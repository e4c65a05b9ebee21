// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for insert / remove sequences.
//!
//! Replays an arbitrary script of edits on a fixed-capacity buffer and on a
//! sorted `Vec` model. After every step the buffer must equal a fresh shuffle
//! of the model, and the returned length must match the model's.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use shufsearch::{insert, remove, shuffle, LayoutError};

const CAPACITY: usize = 48;

#[derive(Debug, Arbitrary)]
enum Edit {
    Insert(u8),
    Remove(u8),
}

fuzz_target!(|script: Vec<Edit>| {
    let mut buffer = [0u8; CAPACITY];
    let mut len = 0;
    let mut model: Vec<u8> = Vec::new();

    for edit in script.iter().take(256) {
        match *edit {
            Edit::Insert(key) => {
                let result = insert(&mut buffer, len, key);
                match model.binary_search(&key) {
                    Ok(_) => assert_eq!(result, Ok(len)),
                    Err(_) if model.len() == CAPACITY => assert_eq!(
                        result,
                        Err(LayoutError::CapacityExceeded {
                            len,
                            capacity: CAPACITY
                        })
                    ),
                    Err(slot) => {
                        model.insert(slot, key);
                        assert_eq!(result, Ok(model.len()));
                    }
                }
            }
            Edit::Remove(key) => {
                let shrunk = remove(&mut buffer, len, &key);
                if let Ok(index) = model.binary_search(&key) {
                    model.remove(index);
                }
                assert_eq!(shrunk, model.len());
            }
        }

        len = model.len();
        let mut expected = model.clone();
        shuffle(&mut expected);
        assert_eq!(&buffer[..len], &expected[..]);
    }
});
