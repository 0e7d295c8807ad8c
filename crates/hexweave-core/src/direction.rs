//! Flat-top hex directions and the odd-q offset neighbour tables.

use std::fmt;

/// Odd-q offset deltas `(dc, dr)` for even columns, indexed by direction.
const EVEN_COL_OFFSETS: [(i32, i32); 6] = [
    (0, -1),  // N
    (1, -1),  // NE
    (1, 0),   // SE
    (0, 1),   // S
    (-1, 0),  // SW
    (-1, -1), // NW
];

/// Odd-q offset deltas `(dc, dr)` for odd columns, indexed by direction.
///
/// Odd columns sit half a cell lower, so the four diagonal deltas shift
/// down by one row relative to [`EVEN_COL_OFFSETS`].
const ODD_COL_OFFSETS: [(i32, i32); 6] = [
    (0, -1), // N
    (1, 0),  // NE
    (1, 1),  // SE
    (0, 1),  // S
    (-1, 1), // SW
    (-1, 0), // NW
];

/// One of the six neighbour directions of a flat-top hex cell.
///
/// The discriminant is the wire index: `0=N, 1=NE, 2=SE, 3=S, 4=SW, 5=NW`.
/// Enumeration order (and therefore [`Direction::ALL`]) is ascending index,
/// which is the tie-break order used by the cycle extractor.
///
/// # Examples
///
/// ```
/// use hexweave_core::Direction;
///
/// assert_eq!(Direction::North.index(), 0);
/// assert_eq!(Direction::North.opposite(), Direction::South);
/// assert_eq!(Direction::from_index(5), Some(Direction::NorthWest));
/// assert_eq!(Direction::from_index(6), None);
///
/// // The opposite map is an involution.
/// for d in Direction::ALL {
///     assert_eq!(d.opposite().opposite(), d);
/// }
/// ```
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Straight up: `(0, -1)` in both column parities.
    North = 0,
    /// Up-right diagonal.
    NorthEast = 1,
    /// Down-right diagonal.
    SouthEast = 2,
    /// Straight down: `(0, 1)` in both column parities.
    South = 3,
    /// Down-left diagonal.
    SouthWest = 4,
    /// Up-left diagonal.
    NorthWest = 5,
}

impl Direction {
    /// All six directions in ascending index order.
    pub const ALL: [Direction; 6] = [
        Direction::North,
        Direction::NorthEast,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::NorthWest,
    ];

    /// The wire index of this direction (`0..=5`).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Look up a direction by wire index. Returns `None` for indices `>= 6`.
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Direction::North),
            1 => Some(Direction::NorthEast),
            2 => Some(Direction::SouthEast),
            3 => Some(Direction::South),
            4 => Some(Direction::SouthWest),
            5 => Some(Direction::NorthWest),
            _ => None,
        }
    }

    /// The antipodal direction: `opp(d) = (d + 3) mod 6`.
    pub const fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::NorthEast => Direction::SouthWest,
            Direction::SouthEast => Direction::NorthWest,
            Direction::South => Direction::North,
            Direction::SouthWest => Direction::NorthEast,
            Direction::NorthWest => Direction::SouthEast,
        }
    }

    /// The `(dc, dr)` delta for stepping from a cell in column `col`.
    ///
    /// Column parity selects the table: odd columns are shifted half a
    /// cell down, so their diagonal deltas differ from even columns.
    pub const fn offset(self, col: u16) -> (i32, i32) {
        if col % 2 == 0 {
            EVEN_COL_OFFSETS[self as usize]
        } else {
            ODD_COL_OFFSETS[self as usize]
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "N",
            Direction::NorthEast => "NE",
            Direction::SouthEast => "SE",
            Direction::South => "S",
            Direction::SouthWest => "SW",
            Direction::NorthWest => "NW",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Index mapping ───────────────────────────────────────────

    #[test]
    fn index_round_trip() {
        for d in Direction::ALL {
            assert_eq!(Direction::from_index(d.index()), Some(d));
        }
        assert_eq!(Direction::from_index(6), None);
        assert_eq!(Direction::from_index(255), None);
    }

    #[test]
    fn all_is_ascending() {
        for (i, d) in Direction::ALL.iter().enumerate() {
            assert_eq!(d.index() as usize, i);
        }
    }

    // ── Opposite involution ─────────────────────────────────────

    #[test]
    fn opposite_is_involution() {
        for d in Direction::ALL {
            assert_eq!(d.opposite().opposite(), d);
        }
    }

    #[test]
    fn opposite_matches_plus_three_mod_six() {
        for d in Direction::ALL {
            assert_eq!(d.opposite().index(), (d.index() + 3) % 6);
        }
    }

    // ── Offset tables ───────────────────────────────────────────

    #[test]
    fn offsets_even_column() {
        assert_eq!(Direction::North.offset(0), (0, -1));
        assert_eq!(Direction::NorthEast.offset(0), (1, -1));
        assert_eq!(Direction::SouthEast.offset(0), (1, 0));
        assert_eq!(Direction::South.offset(0), (0, 1));
        assert_eq!(Direction::SouthWest.offset(0), (-1, 0));
        assert_eq!(Direction::NorthWest.offset(0), (-1, -1));
    }

    #[test]
    fn offsets_odd_column() {
        assert_eq!(Direction::North.offset(1), (0, -1));
        assert_eq!(Direction::NorthEast.offset(1), (1, 0));
        assert_eq!(Direction::SouthEast.offset(1), (1, 1));
        assert_eq!(Direction::South.offset(1), (0, 1));
        assert_eq!(Direction::SouthWest.offset(1), (-1, 1));
        assert_eq!(Direction::NorthWest.offset(1), (-1, 0));
    }

    #[test]
    fn vertical_offsets_are_parity_independent() {
        for col in [0u16, 1, 2, 3, 199] {
            assert_eq!(Direction::North.offset(col), (0, -1));
            assert_eq!(Direction::South.offset(col), (0, 1));
        }
    }

    // ── Display ─────────────────────────────────────────────────

    #[test]
    fn display_names() {
        let names: Vec<String> = Direction::ALL.iter().map(|d| d.to_string()).collect();
        assert_eq!(names, ["N", "NE", "SE", "S", "SW", "NW"]);
    }
}
