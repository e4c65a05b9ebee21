// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Randomized differential verification over a range of lengths.
//!
//! For every length `0..=max_count`: generate distinct random keys, sort and
//! shuffle them, then check
//!
//! 1. the result is a valid median-first layout,
//! 2. every key is found and translates back to its sorted rank,
//! 3. keys between and around the data are not found,
//! 4. unshuffle restores the sorted input exactly,
//! 5. (optionally) remove / insert match a fresh shuffle of the edited data.
//!
//! Each length draws from its own RNG derived from the seed, so the report is
//! identical whether lengths run serially or on the rayon pool.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::index::deshuffle_index;
use crate::mutation::{insert, remove};
use crate::search::search;
use crate::shuffle::shuffle;
use crate::unshuffle::unshuffle;

use super::types::check_shuffled;

/// What to verify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyOptions {
    /// Largest length checked (inclusive).
    pub max_count: usize,
    /// Seed for the per-length generators.
    pub seed: u64,
    /// Also check remove and insert against a fresh shuffle.
    pub mutations: bool,
}

impl Default for VerifyOptions {
    fn default() -> Self {
        Self {
            max_count: 1024,
            seed: 0,
            mutations: false,
        }
    }
}

/// Which check failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Check {
    Layout,
    Rank,
    Absent,
    RoundTrip,
    Remove,
    Insert,
}

/// A single failed check at one length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthFailure {
    pub len: usize,
    pub check: Check,
    pub detail: String,
}

/// Summary of a verification run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationReport {
    pub seed: u64,
    pub lengths_checked: usize,
    pub lookups: usize,
    pub mutations: usize,
    pub failures: Vec<LengthFailure>,
}

impl VerificationReport {
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }

    fn absorb(&mut self, outcome: LengthOutcome) {
        self.lengths_checked += 1;
        self.lookups += outcome.lookups;
        self.mutations += outcome.mutations;
        self.failures.extend(outcome.failures);
    }
}

/// Counters and failures for one length.
#[derive(Debug, Default)]
pub struct LengthOutcome {
    pub lookups: usize,
    pub mutations: usize,
    pub failures: Vec<LengthFailure>,
}

impl LengthOutcome {
    fn fail(&mut self, len: usize, check: Check, detail: String) {
        self.failures.push(LengthFailure { len, check, detail });
    }
}

/// Run every length in `0..=options.max_count`. `on_length` is called once per
/// finished length, from whichever thread finished it.
pub fn verify_lengths<F>(options: &VerifyOptions, on_length: F) -> VerificationReport
where
    F: Fn(usize) + Sync,
{
    let run = |len: usize| {
        let outcome = verify_length(len, options);
        on_length(len);
        outcome
    };

    #[cfg(feature = "parallel")]
    let outcomes: Vec<LengthOutcome> = (0..=options.max_count).into_par_iter().map(run).collect();
    #[cfg(not(feature = "parallel"))]
    let outcomes: Vec<LengthOutcome> = (0..=options.max_count).map(run).collect();

    let mut report = VerificationReport {
        seed: options.seed,
        ..VerificationReport::default()
    };
    for outcome in outcomes {
        report.absorb(outcome);
    }
    report
}

/// Check a single length.
pub fn verify_length(len: usize, options: &VerifyOptions) -> LengthOutcome {
    let mut rng = StdRng::seed_from_u64(
        options
            .seed
            .wrapping_add(len as u64)
            .wrapping_mul(0x9E37_79B9_7F4A_7C15),
    );
    let mut outcome = LengthOutcome::default();

    let sorted = distinct_sorted(&mut rng, len);
    let mut shuffled = sorted.clone();
    shuffle(&mut shuffled);

    if let Err(err) = check_shuffled(&shuffled) {
        outcome.fail(len, Check::Layout, err.to_string());
        return outcome;
    }

    for (rank, key) in sorted.iter().enumerate() {
        outcome.lookups += 1;
        let position = search(&shuffled, key);
        let translated = position.and_then(|p| deshuffle_index(p, len));
        if translated != Some(rank) {
            outcome.fail(
                len,
                Check::Rank,
                format!(
                    "key {} at rank {}: shuffled {:?}, translated {:?}",
                    key, rank, position, translated
                ),
            );
            break;
        }
    }

    for gap in gaps(&sorted) {
        outcome.lookups += 1;
        if let Some(position) = search(&shuffled, &gap) {
            outcome.fail(len, Check::Absent, format!("absent key {} found at {}", gap, position));
            break;
        }
    }

    let mut restored = shuffled.clone();
    unshuffle(&mut restored);
    if restored != sorted {
        let position = restored.iter().zip(&sorted).position(|(a, b)| a != b);
        outcome.fail(len, Check::RoundTrip, format!("first mismatch at {:?}", position));
    }

    if options.mutations && len > 0 {
        check_mutations(len, &sorted, &shuffled, &mut rng, &mut outcome);
    }

    outcome
}

fn check_mutations(
    len: usize,
    sorted: &[i64],
    shuffled: &[i64],
    rng: &mut StdRng,
    outcome: &mut LengthOutcome,
) {
    let victim = sorted[rng.gen_range(0..len)];

    let mut buffer = shuffled.to_vec();
    outcome.mutations += 1;
    let shrunk = remove(&mut buffer, len, &victim);
    let mut expected: Vec<i64> = sorted.iter().copied().filter(|&k| k != victim).collect();
    shuffle(&mut expected);
    if shrunk != len - 1 || buffer[..shrunk] != expected[..] {
        outcome.fail(len, Check::Remove, format!("removing {} gave len {}", victim, shrunk));
        return;
    }

    outcome.mutations += 1;
    match insert(&mut buffer, shrunk, victim) {
        Ok(grown) if grown == len && buffer == shuffled => {}
        Ok(grown) => outcome.fail(
            len,
            Check::Insert,
            format!("reinserting {} gave len {} with a different layout", victim, grown),
        ),
        Err(err) => outcome.fail(len, Check::Insert, err.to_string()),
    }
}

/// `len` distinct keys in ascending order.
fn distinct_sorted(rng: &mut StdRng, len: usize) -> Vec<i64> {
    let mut keys: Vec<i64> = (0..len).map(|_| i64::from(rng.gen::<u32>())).collect();
    keys.sort_unstable();
    for i in 1..keys.len() {
        if keys[i] <= keys[i - 1] {
            keys[i] = keys[i - 1] + 1;
        }
    }
    keys
}

/// Keys that fall strictly between neighbours, or outside the range.
fn gaps(sorted: &[i64]) -> Vec<i64> {
    let Some((&first, &last)) = sorted.first().zip(sorted.last()) else {
        return vec![0];
    };
    let mut keys = vec![first - 1, last + 1];
    keys.extend(
        sorted
            .windows(2)
            .filter(|pair| pair[1] - pair[0] > 1)
            .map(|pair| pair[0] + 1),
    );
    keys
}
