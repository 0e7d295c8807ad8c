//! Benchmark profiles and utilities for the Hexweave lattice engine.
//!
//! Provides pre-built lattice states for benchmarking and examples:
//!
//! - [`seeded_profile`]: freshly seeded lattice at a given size
//! - [`scrambled_profile`]: lattice driven through a deterministic
//!   scramble so cycle structure is irregular, as it is in production
//!   after the first few requests

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use hexweave_lattice::{Lattice, Pattern};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Build a freshly seeded vertical lattice.
pub fn seeded_profile(size: u16) -> Lattice {
    Lattice::new(size, Pattern::Vertical).expect("benchmark sizes are in range")
}

/// Build a lattice scrambled with `4 * size` swap steps from a fixed
/// seed, so repeated benchmark runs measure the same state.
pub fn scrambled_profile(size: u16, seed: u64) -> Lattice {
    let mut lattice = seeded_profile(size);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    lattice.scramble(size as u32 * 4, &mut rng);
    lattice
}
