//! Precomputed toroidal neighbour lookups.

use hexweave_core::{Coord, Direction};

/// A `size × size × 6` table of precomputed neighbour coordinates.
///
/// The wrap arithmetic in [`Coord::step`] is the single most frequent
/// operation in both the edge-swap and cycle-extraction hot loops, so it
/// is evaluated once per lattice size and every later lookup is a single
/// indexed read. The table is immutable after construction; resizing the
/// lattice builds a fresh one.
#[derive(Clone, Debug)]
pub struct NeighbourTable {
    size: u16,
    /// Flat `[cell][direction]` layout, `cell_count * 6` entries.
    table: Vec<Coord>,
}

impl NeighbourTable {
    /// Build the table for a `size × size` torus.
    pub fn new(size: u16) -> Self {
        let cell_count = size as usize * size as usize;
        let mut table = Vec::with_capacity(cell_count * 6);
        for col in 0..size {
            for row in 0..size {
                let coord = Coord::new(col, row);
                for dir in Direction::ALL {
                    table.push(coord.step(dir, size));
                }
            }
        }
        Self { size, table }
    }

    /// Lattice size this table was built for.
    pub fn size(&self) -> u16 {
        self.size
    }

    /// The neighbour of `coord` in direction `dir`.
    ///
    /// `coord` must be canonical (in `[0, size)` on both axes).
    #[inline]
    pub fn step(&self, coord: Coord, dir: Direction) -> Coord {
        self.table[coord.index(self.size) * 6 + dir.index() as usize]
    }

    /// The direction from `from` to `to`, or `None` if the cells are not
    /// adjacent.
    ///
    /// Checks the six cached neighbours of `from`; O(1), no allocation.
    #[inline]
    pub fn direction_between(&self, from: Coord, to: Coord) -> Option<Direction> {
        let base = from.index(self.size) * 6;
        Direction::ALL
            .into_iter()
            .find(|d| self.table[base + d.index() as usize] == to)
    }
}
