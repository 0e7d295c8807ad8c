//! Cell coordinates and the toroidal neighbour step.

use crate::direction::Direction;
use std::fmt;

/// A cell position on a toroidal lattice of `size × size` cells.
///
/// `col` and `row` are always canonical, i.e. in `[0, size)`. Sizes are
/// capped at 200, so `u16` holds every coordinate with room to spare.
///
/// # Examples
///
/// ```
/// use hexweave_core::{Coord, Direction};
///
/// let c = Coord::new(0, 0);
/// // Stepping north off the top edge wraps to the bottom row.
/// assert_eq!(c.step(Direction::North, 5), Coord::new(0, 4));
///
/// // A step and its opposite cancel out.
/// let d = Direction::NorthEast;
/// assert_eq!(c.step(d, 5).step(d.opposite(), 5), c);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// Column index, `0 <= col < size`.
    pub col: u16,
    /// Row index, `0 <= row < size`.
    pub row: u16,
}

impl Coord {
    /// Create a coordinate from canonical components.
    pub const fn new(col: u16, row: u16) -> Self {
        Self { col, row }
    }

    /// Normalize arbitrary integer components onto a torus of the given
    /// size using Euclidean modulo.
    ///
    /// `size` must be non-zero.
    pub fn wrapped(col: i32, row: i32, size: u16) -> Self {
        Self {
            col: wrap(col, size),
            row: wrap(row, size),
        }
    }

    /// The neighbour in direction `dir` on a torus of the given size.
    ///
    /// Pure arithmetic: parity-indexed offset plus Euclidean wrap on both
    /// axes. Never allocates.
    pub fn step(self, dir: Direction, size: u16) -> Self {
        let (dc, dr) = dir.offset(self.col);
        Self::wrapped(self.col as i32 + dc, self.row as i32 + dr, size)
    }

    /// Flat index into a `size × size` cell array (column-major, matching
    /// the canonical col-outer/row-inner enumeration order).
    pub const fn index(self, size: u16) -> usize {
        self.col as usize * size as usize + self.row as usize
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// Euclidean modulo onto `[0, size)`.
fn wrap(v: i32, size: u16) -> u16 {
    debug_assert!(size > 0);
    v.rem_euclid(size as i32) as u16
}
