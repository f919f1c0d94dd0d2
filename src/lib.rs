//! The `h3syl` library maps geographic coordinates to short, pronounceable
//! syllable addresses and back.
//!
//! Every location on Earth is identified by an H3 cell at resolution 15
//! (roughly half-meter ground resolution). The 122 base cells are reordered
//! along a Hamiltonian path so that consecutive indices are spatial
//! neighbors, the cell hierarchy is packed into a single integer in a
//! mixed-radix system, and that integer is written as a fixed-length string
//! of consonant-vowel syllables drawn from a configurable alphabet.
//! Truncated addresses still decode to a bounded region with an estimated
//! area and confidence.

// Lints {{{

#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rust_2021_compatibility,
    future_incompatible,
    rustdoc::all,
    rustdoc::missing_crate_level_docs,
    missing_docs,
    unsafe_code
)]
#![allow(
    // Usually yes, but not really applicable for most literals in this crate.
    clippy::unreadable_literal,
)]

// }}}

mod address;
mod alphabet;
mod config;
pub mod error;
mod estimate;
mod grid;
mod number;
mod ordering;
mod system;

pub use address::{decode, encode, Syllable};
pub use alphabet::Alphabet;
pub use config::{Config, ConfigMetadata, ConfigRecord};
pub use estimate::{Bounds, PrefixEstimate};
pub use grid::{CellPath, Grid};
pub use number::CellNumber;
pub use ordering::{CellOrdering, OrderingRecord};
pub use system::SyllableSystem;

// Re-exported because they are part of the public surface (coordinates in,
// coordinates out).
pub use h3o::{CellIndex, LatLng, Resolution};

// -----------------------------------------------------------------------------

/// Number of H3 base cells.
pub const BASE_CELL_COUNT: u8 = 122;

/// Number of resolution-15 descendants of a base cell: `7^15`.
pub const CHILD_SPAN: u64 = 4_747_561_509_943;

/// Size of the cell integer space: `122 * 7^15`.
///
/// Every resolution-15 cell packs into an integer below this bound, and a
/// syllable configuration is feasible only when its address space covers it.
pub const CELL_SPACE: u64 = BASE_CELL_COUNT as u64 * CHILD_SPAN;

/// Longest supported address, in syllables.
///
/// An alphabet whose minimal covering length exceeds this is rejected as
/// infeasible.
pub const MAX_ADDRESS_LENGTH: u8 = 19;
