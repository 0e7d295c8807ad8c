//! Hexweave: a degree-two subgraph engine on a toroidal hex lattice.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the Hexweave sub-crates. For most users, adding `hexweave` as a
//! single dependency is sufficient; the HTTP facade lives in the
//! separate `hexweave-server` binary crate.
//!
//! # Quick start
//!
//! ```rust
//! use hexweave::prelude::*;
//! use rand::SeedableRng;
//!
//! // A 10×10 torus seeded with vertical column cycles.
//! let mut lattice = Lattice::new(10, Pattern::Vertical).unwrap();
//! assert_eq!(lattice.find_cycles().len(), 10);
//!
//! // Randomize with degree-preserving edge swaps.
//! let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(1);
//! lattice.scramble(200, &mut rng);
//!
//! // Every cell still has exactly two doors, so the cycle
//! // decomposition still covers the whole torus.
//! let covered: usize = lattice.find_cycles().iter().map(Vec::len).sum();
//! assert_eq!(covered, 100);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub use hexweave_core as types;
pub use hexweave_lattice as lattice;

/// Commonly used types, importable in one line.
pub mod prelude {
    pub use hexweave_core::{Coord, Direction, DoorMask, LatticeError};
    pub use hexweave_lattice::{KeyStyle, Lattice, Pattern, Snapshot, WalkScan};
}
