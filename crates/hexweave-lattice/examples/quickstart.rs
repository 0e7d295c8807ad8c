//! Hexweave quickstart — seed, scramble, decompose.
//!
//! Builds a 12×12 lattice, scrambles it, and prints the resulting cycle
//! decomposition.
//!
//! Run with:
//!   cargo run --example quickstart

use hexweave_lattice::{Lattice, Pattern};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const SIZE: u16 = 12;
const STEPS: u32 = 400;

fn main() {
    let mut lattice = Lattice::new(SIZE, Pattern::Vertical).expect("size in range");
    println!(
        "seeded {SIZE}x{SIZE} vertical: {} column cycles",
        lattice.find_cycles().len()
    );

    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let swaps = lattice.scramble(STEPS, &mut rng);
    println!("scramble({STEPS}): {swaps} successful swaps");

    let cycles = lattice.find_cycles();
    let mut lengths: Vec<usize> = cycles.iter().map(Vec::len).collect();
    lengths.sort_unstable();
    println!("{} cycles, lengths {:?}", cycles.len(), lengths);

    let total: usize = lengths.iter().sum();
    assert_eq!(total, lattice.cell_count(), "cycles must cover the torus");
}
