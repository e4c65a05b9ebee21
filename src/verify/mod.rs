// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: validators, runtime contracts, and the randomized
//! verification driver.
//!
//! Three complementary approaches to catching bugs:
//!
//! 1. **Validators** (`check_sorted`, `check_shuffled`) that callers run before
//!    trusting a region. `Sequence` runs them at construction.
//!
//! 2. **Runtime contracts** that panic in debug builds when a transform is fed
//!    a region that breaks its precondition. Zero-cost in release.
//!
//! 3. **The randomized driver** (`verify_lengths`) that checks search, rank
//!    translation and the round trip for every length up to a bound, against
//!    freshly generated data. The CLI `verify` command runs it.

mod report;
mod types;
pub mod contracts;

pub use report::{
    verify_length, verify_lengths, Check, LengthFailure, LengthOutcome, VerificationReport,
    VerifyOptions,
};
pub use types::*;
