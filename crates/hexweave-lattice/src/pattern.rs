//! Deterministic 2-regular seed patterns.

use hexweave_core::{Direction, DoorMask};
use std::fmt;

/// A named initial configuration assigning two doors to every cell.
///
/// Each pattern is a per-column mask chosen so that the symmetric mate of
/// every seeded door is itself seeded: stepping along a set door always
/// lands on a cell whose mask contains the opposite direction. Both
/// lattice invariants therefore hold after a reset with no repair pass.
///
/// Unknown pattern names fall back to [`Pattern::Vertical`] at the
/// request boundary; see [`Pattern::from_name`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Pattern {
    /// `{N, S}` everywhere: one cycle per column.
    #[default]
    Vertical,
    /// `{NE, SW}` everywhere: north-east diagonal weave.
    Diagonal1,
    /// `{SE, NW}` everywhere: south-east diagonal weave.
    Diagonal2,
    /// `{NE, NW}` on even columns, `{SE, SW}` on odd ones. On odd-sized
    /// lattices the last column takes `{SE, NW}` so the column-parity
    /// alternation still closes across the wrap.
    Zigzag,
}

impl Pattern {
    /// Parse a wire pattern name. Returns `None` for unknown names.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "vertical" => Some(Self::Vertical),
            "diagonal_1" => Some(Self::Diagonal1),
            "diagonal_2" => Some(Self::Diagonal2),
            "zigzag" => Some(Self::Zigzag),
            _ => None,
        }
    }

    /// The wire name of this pattern.
    pub fn name(self) -> &'static str {
        match self {
            Self::Vertical => "vertical",
            Self::Diagonal1 => "diagonal_1",
            Self::Diagonal2 => "diagonal_2",
            Self::Zigzag => "zigzag",
        }
    }

    /// The door mask seeded into every cell of column `col`.
    pub(crate) fn column_mask(self, col: u16, size: u16) -> DoorMask {
        match self {
            Self::Vertical => DoorMask::from_directions(&[Direction::North, Direction::South]),
            Self::Diagonal1 => {
                DoorMask::from_directions(&[Direction::NorthEast, Direction::SouthWest])
            }
            Self::Diagonal2 => {
                DoorMask::from_directions(&[Direction::SouthEast, Direction::NorthWest])
            }
            Self::Zigzag => {
                if size % 2 == 1 && col == size - 1 {
                    DoorMask::from_directions(&[Direction::SouthEast, Direction::NorthWest])
                } else if col % 2 == 0 {
                    DoorMask::from_directions(&[Direction::NorthEast, Direction::NorthWest])
                } else {
                    DoorMask::from_directions(&[Direction::SouthEast, Direction::SouthWest])
                }
            }
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
