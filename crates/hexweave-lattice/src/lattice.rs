//! The lattice: cell store with symmetric door writes.

use crate::neighbours::NeighbourTable;
use crate::pattern::Pattern;
use crate::snapshot::{KeyStyle, Snapshot};
use hexweave_core::{Coord, Direction, DoorMask, LatticeError};
use smallvec::SmallVec;
use std::sync::Arc;

/// A 2-regular subgraph on a `size × size` toroidal flat-top hex lattice.
///
/// Owns the packed cell array (one [`DoorMask`] byte per cell), the
/// immutable [`NeighbourTable`], and the memoized wire snapshot. All
/// door mutations go through the paired [`add`](Lattice::add) /
/// [`remove`](Lattice::remove) operations, which always write both sides
/// of an edge; there is no single-sided write, so door symmetry is
/// structural rather than checked.
///
/// Public coordinates are raw `i32`s normalized by toroidal wrap, so any
/// integer pair names a valid cell and no lookup can fail.
#[derive(Clone, Debug)]
pub struct Lattice {
    pub(crate) size: u16,
    /// Packed door masks, indexed by [`Coord::index`] (col-outer).
    pub(crate) cells: Vec<DoorMask>,
    pub(crate) neighbours: NeighbourTable,
    /// Set by every mutation; cleared when a snapshot is rebuilt.
    pub(crate) dirty: bool,
    pub(crate) cached: Option<Arc<Snapshot>>,
    pub(crate) key_style: KeyStyle,
}

impl Lattice {
    /// Smallest supported lattice size.
    pub const MIN_SIZE: u16 = 5;
    /// Largest supported lattice size.
    pub const MAX_SIZE: u16 = 200;

    /// Create a lattice seeded with the given pattern.
    ///
    /// Returns `Err(LatticeError::SizeOutOfRange)` if `size` lies outside
    /// `[MIN_SIZE, MAX_SIZE]`. Callers that want coercion instead of an
    /// error clamp before constructing, as the HTTP facade does.
    pub fn new(size: u16, pattern: Pattern) -> Result<Self, LatticeError> {
        if size < Self::MIN_SIZE || size > Self::MAX_SIZE {
            return Err(LatticeError::SizeOutOfRange {
                value: size,
                min: Self::MIN_SIZE,
                max: Self::MAX_SIZE,
            });
        }
        let cell_count = size as usize * size as usize;
        let mut lattice = Self {
            size,
            cells: vec![DoorMask::EMPTY; cell_count],
            neighbours: NeighbourTable::new(size),
            dirty: true,
            cached: None,
            key_style: KeyStyle::Canonical,
        };
        lattice.reset(pattern);
        Ok(lattice)
    }

    /// Switch the wire key style emitted by [`snapshot`](Lattice::snapshot).
    pub fn with_key_style(mut self, key_style: KeyStyle) -> Self {
        self.key_style = key_style;
        self.mark_dirty();
        self
    }

    /// Lattice side length.
    pub fn size(&self) -> u16 {
        self.size
    }

    /// The wire key style snapshots serialize with.
    pub fn key_style(&self) -> KeyStyle {
        self.key_style
    }

    /// Total number of cells (`size²`).
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// All cells in canonical order: column-outer, row-inner.
    ///
    /// This is the enumeration order used by the cycle extractor's start
    /// scan and by the snapshot's dense cell dump.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        let size = self.size;
        (0..size).flat_map(move |col| (0..size).map(move |row| Coord::new(col, row)))
    }

    /// Clear every door and refill from the pattern's per-column masks.
    ///
    /// Patterns assign the same globally consistent mask to every cell in
    /// a column, so both the symmetry and the degree-two invariants hold
    /// afterwards by construction; no repair pass runs.
    pub fn reset(&mut self, pattern: Pattern) {
        for col in 0..self.size {
            let mask = pattern.column_mask(col, self.size);
            let base = col as usize * self.size as usize;
            for row in 0..self.size as usize {
                self.cells[base + row] = mask;
            }
        }
        self.mark_dirty();
    }

    // ── Cell store ──────────────────────────────────────────────

    /// The packed door mask of a cell. Bit-level accessor for engine and
    /// test use; the wire-facing view is [`snapshot`](Lattice::snapshot).
    pub fn mask(&self, col: i32, row: i32) -> DoorMask {
        self.cells[self.wrap(col, row).index(self.size)]
    }

    /// Whether the cell has a door in direction `dir`.
    pub fn has(&self, col: i32, row: i32, dir: Direction) -> bool {
        self.mask(col, row).contains(dir)
    }

    /// The cell's doors in ascending direction order.
    pub fn doors(&self, col: i32, row: i32) -> SmallVec<[Direction; 6]> {
        self.mask(col, row).iter().collect()
    }

    /// Set the door at `(col, row, dir)` and its mate on the neighbour.
    /// Idempotent.
    pub fn add(&mut self, col: i32, row: i32, dir: Direction) {
        self.add_at(self.wrap(col, row), dir);
    }

    /// Clear the door at `(col, row, dir)` and its mate on the neighbour.
    /// Idempotent.
    pub fn remove(&mut self, col: i32, row: i32, dir: Direction) {
        self.remove_at(self.wrap(col, row), dir);
    }

    // ── Canonical-coordinate internals ──────────────────────────

    fn wrap(&self, col: i32, row: i32) -> Coord {
        Coord::wrapped(col, row, self.size)
    }

    #[inline]
    pub(crate) fn mask_at(&self, coord: Coord) -> DoorMask {
        self.cells[coord.index(self.size)]
    }

    #[inline]
    pub(crate) fn doors_at(&self, coord: Coord) -> SmallVec<[Direction; 6]> {
        self.mask_at(coord).iter().collect()
    }

    pub(crate) fn add_at(&mut self, coord: Coord, dir: Direction) {
        let mate = self.neighbours.step(coord, dir);
        self.cells[coord.index(self.size)].insert(dir);
        self.cells[mate.index(self.size)].insert(dir.opposite());
        self.mark_dirty();
    }

    pub(crate) fn remove_at(&mut self, coord: Coord, dir: Direction) {
        let mate = self.neighbours.step(coord, dir);
        self.cells[coord.index(self.size)].remove(dir);
        self.cells[mate.index(self.size)].remove(dir.opposite());
        self.mark_dirty();
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
        self.cached = None;
    }
}
