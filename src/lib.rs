//! In-place shuffled binary search.
//!
//! A sorted slice is rearranged so that each block starts with its median,
//! followed by its lower half and then its upper half, recursively. Searching
//! that layout starts at position 0 and only ever reads forward in memory:
//! a miss on the low side reads the very next element, a miss on the high
//! side skips past the lower half.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  layout.rs  │────▶│  shuffle.rs  │────▶│ mutation.rs │
//! │ (tables,    │     │ unshuffle.rs │     │ (insert,    │
//! │  WorkList)  │     │              │     │  remove)    │
//! └─────────────┘     └──────────────┘     └─────────────┘
//!                                                 │
//! ┌─────────────┐     ┌──────────────┐            ▼
//! │  search.rs  │────▶│   index.rs   │     ┌─────────────┐
//! │ (descent,   │     │ (rank <-> pos│────▶│ sequence.rs │
//! │  probes)    │     │  arithmetic) │     │ (typed API) │
//! └─────────────┘     └──────────────┘     └─────────────┘
//!        │                   │                    │
//!        ▼                   ▼                    ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                     verify/                         │
//! │  (LayoutError, check_sorted, check_shuffled,        │
//! │   debug contracts, randomized verification)         │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use shufsearch::{deshuffle_index, search, shuffle, unshuffle};
//!
//! let mut keys = [0, 1, 2, 3, 4];
//! shuffle(&mut keys);
//! assert_eq!(keys, [2, 1, 0, 4, 3]);
//!
//! let position = search(&keys, &4);
//! assert_eq!(position, Some(3));
//! assert_eq!(position.and_then(|p| deshuffle_index(p, keys.len())), Some(4));
//!
//! unshuffle(&mut keys);
//! assert_eq!(keys, [0, 1, 2, 3, 4]);
//! ```
//!
//! # Concurrency
//!
//! Every operation is synchronous and borrows its region for the whole call:
//! transforms and mutations take `&mut [T]`, search takes `&[T]`. Sharing a
//! shuffled slice across threads for lookups is fine; mutating it needs the
//! caller's own exclusion, as for any slice.

// Module declarations
pub mod index;
pub mod layout;
mod mutation;
mod search;
mod sequence;
mod shuffle;
mod unshuffle;
pub mod verify;

#[doc(hidden)]
pub mod testing;

// Re-exports for public API
pub use index::{deshuffle, deshuffle_index, shuffle_index};
pub use layout::{Block, Paired, Permutable, SMALL_BLOCK_LIMIT};
pub use mutation::{insert, remove};
pub use search::{probes, search, search_by, search_by_key, Probe, Probes};
pub use sequence::{Layout, Mutation, Sequence};
pub use shuffle::{shuffle, shuffle_pairs, shuffle_region};
pub use unshuffle::{unshuffle, unshuffle_pairs, unshuffle_region};
pub use verify::{check_shuffled, check_sorted, LayoutError, VerificationReport};
