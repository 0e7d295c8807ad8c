//! Lattice invariant test helpers.
//!
//! These assertions verify the contracts every healthy lattice must
//! satisfy. Reused across the unit-test modules (patterns, swaps,
//! lattice store).

use crate::lattice::Lattice;

/// Assert every door has its mate: `has(u, d)` implies
/// `has(neighbour(u, d), opp(d))`.
pub(crate) fn assert_door_symmetry(lattice: &Lattice) {
    for coord in lattice.coords() {
        for dir in lattice.doors_at(coord) {
            let mate = coord.step(dir, lattice.size());
            assert!(
                lattice.mask_at(mate).contains(dir.opposite()),
                "door {coord} -> {dir} has no mate on {mate}"
            );
        }
    }
}

/// Assert every cell has exactly two doors.
pub(crate) fn assert_degree_two(lattice: &Lattice) {
    for coord in lattice.coords() {
        let count = lattice.mask_at(coord).count();
        assert_eq!(count, 2, "cell {coord} has degree {count}");
    }
}

/// Assert the cycle decomposition covers every cell exactly once.
pub(crate) fn assert_cycle_cover(lattice: &Lattice) {
    let mut seen = vec![false; lattice.cell_count()];
    for cycle in lattice.find_cycles() {
        for cell in cycle {
            let idx = cell.index(lattice.size());
            assert!(!seen[idx], "cell {cell} appears in two cycles");
            seen[idx] = true;
        }
    }
    let covered = seen.iter().filter(|&&v| v).count();
    assert_eq!(
        covered,
        lattice.cell_count(),
        "cycle cover incomplete: {covered} of {} cells",
        lattice.cell_count()
    );
}

/// Run all invariant checks on a lattice.
pub(crate) fn run_full_compliance(lattice: &Lattice) {
    assert_door_symmetry(lattice);
    assert_degree_two(lattice);
    assert_cycle_cover(lattice);
}
