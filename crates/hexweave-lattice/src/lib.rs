//! Degree-two subgraph engine on a toroidal flat-top hex lattice.
//!
//! A [`Lattice`] owns a `size × size` torus of hex cells (odd-q offset
//! layout) whose door bits form a 2-regular subgraph: every cell has
//! exactly two doors, so the graph is a disjoint union of simple cycles.
//! The engine offers one dynamic operation — a Markov edge swap that
//! rewires two edges while provably preserving degree two — plus cycle
//! decomposition and a memoized wire snapshot.
//!
//! Two invariants govern every mutation:
//!
//! - **Symmetry**: a door from `u` in direction `d` always has a mate on
//!   `neighbour(u, d)` in the opposite direction. All writes go through
//!   paired [`Lattice::add`]/[`Lattice::remove`], so this holds
//!   structurally.
//! - **Degree two**: after any [`Lattice::reset`] or successful swap,
//!   every cell has exactly two doors.
//!
//! # Examples
//!
//! ```
//! use hexweave_lattice::{Lattice, Pattern};
//! use rand::SeedableRng;
//!
//! let mut lattice = Lattice::new(10, Pattern::Vertical).unwrap();
//! // Ten vertical column cycles of length ten.
//! assert_eq!(lattice.find_cycles().len(), 10);
//!
//! let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(7);
//! let swaps = lattice.scramble(50, &mut rng);
//! assert!(swaps <= 50);
//! // Still a full cycle cover after scrambling.
//! let covered: usize = lattice.find_cycles().iter().map(Vec::len).sum();
//! assert_eq!(covered, 100);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cycles;
pub mod lattice;
pub mod neighbours;
pub mod pattern;
pub mod snapshot;
pub mod swap;

#[cfg(test)]
pub(crate) mod compliance;

pub use cycles::WalkScan;
pub use lattice::Lattice;
pub use neighbours::NeighbourTable;
pub use pattern::Pattern;
pub use snapshot::{KeyStyle, Snapshot};

// Re-export the core vocabulary so downstream crates need only one import.
pub use hexweave_core::{Coord, Direction, DoorMask, LatticeError};
