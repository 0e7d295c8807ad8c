//! Memoized wire-shape dump of the lattice.

use crate::lattice::Lattice;
use hexweave_core::Coord;
use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use smallvec::SmallVec;
use std::sync::Arc;

/// Field naming used when a [`Snapshot`] is serialized.
///
/// Canonical output names cell and cycle coordinates `col`/`row`. The
/// legacy style emits `q`/`r` instead, matching the wire format older
/// clients were built against. The map keys (`"c,r"`) and the overall
/// shape are identical in both styles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KeyStyle {
    /// `col` / `row` field names.
    #[default]
    Canonical,
    /// `q` / `r` field names for backwards-compatible clients.
    Legacy,
}

impl KeyStyle {
    fn col_key(self) -> &'static str {
        match self {
            Self::Canonical => "col",
            Self::Legacy => "q",
        }
    }

    fn row_key(self) -> &'static str {
        match self {
            Self::Canonical => "row",
            Self::Legacy => "r",
        }
    }
}

/// One cell of the dense dump: its coordinates and sorted door list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellEntry {
    col: u16,
    row: u16,
    doors: SmallVec<[u8; 6]>,
}

impl CellEntry {
    /// Column index, repeated from the map key for client compatibility.
    pub fn col(&self) -> u16 {
        self.col
    }

    /// Row index, repeated from the map key for client compatibility.
    pub fn row(&self) -> u16 {
        self.row
    }

    /// Door direction indices in ascending order.
    pub fn doors(&self) -> &[u8] {
        &self.doors
    }
}

/// A full dump of the lattice: every cell with its door list, the cycle
/// decomposition, and the size.
///
/// Built by [`Lattice::snapshot`] and cached there behind a dirty flag:
/// repeated requests against an unmutated lattice get the same `Arc`
/// back. Serialization (one JSON map with `cells`, `cycles`, `size`) is
/// hand-rolled so one runtime [`KeyStyle`] flag can rename the
/// coordinate fields without a second set of types.
#[derive(Clone, Debug)]
pub struct Snapshot {
    size: u16,
    cells: IndexMap<String, CellEntry>,
    cycles: Vec<Vec<Coord>>,
    key_style: KeyStyle,
}

impl Snapshot {
    /// Lattice side length at dump time.
    pub fn size(&self) -> u16 {
        self.size
    }

    /// Dense cell map keyed `"c,r"`, in canonical col-outer order.
    pub fn cells(&self) -> &IndexMap<String, CellEntry> {
        &self.cells
    }

    /// The cycle decomposition at dump time.
    pub fn cycles(&self) -> &[Vec<Coord>] {
        &self.cycles
    }

    /// Field naming this snapshot serializes with.
    pub fn key_style(&self) -> KeyStyle {
        self.key_style
    }
}

impl Lattice {
    /// The memoized dump of the current state.
    ///
    /// A clean lattice returns the cached `Arc` untouched; any
    /// [`add`](Lattice::add) / [`remove`](Lattice::remove) /
    /// [`reset`](Lattice::reset) since the last call forces a rebuild.
    pub fn snapshot(&mut self) -> Arc<Snapshot> {
        if !self.dirty {
            if let Some(cached) = &self.cached {
                return Arc::clone(cached);
            }
        }
        let snapshot = Arc::new(self.build_snapshot());
        self.cached = Some(Arc::clone(&snapshot));
        self.dirty = false;
        snapshot
    }

    fn build_snapshot(&self) -> Snapshot {
        let mut cells = IndexMap::with_capacity(self.cell_count());
        for coord in self.coords() {
            let doors: SmallVec<[u8; 6]> =
                self.mask_at(coord).iter().map(|d| d.index()).collect();
            cells.insert(
                format!("{},{}", coord.col, coord.row),
                CellEntry {
                    col: coord.col,
                    row: coord.row,
                    doors,
                },
            );
        }
        Snapshot {
            size: self.size,
            cells,
            cycles: self.find_cycles(),
            key_style: self.key_style,
        }
    }
}

// ── Serialization ───────────────────────────────────────────────

impl Serialize for Snapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("cells", &CellsField(self))?;
        map.serialize_entry("cycles", &CyclesField(self))?;
        map.serialize_entry("size", &self.size)?;
        map.end()
    }
}

struct CellsField<'a>(&'a Snapshot);

impl Serialize for CellsField<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.cells.len()))?;
        for (key, entry) in &self.0.cells {
            map.serialize_entry(key, &CellField(entry, self.0.key_style))?;
        }
        map.end()
    }
}

struct CellField<'a>(&'a CellEntry, KeyStyle);

impl Serialize for CellField<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry(self.1.col_key(), &self.0.col)?;
        map.serialize_entry(self.1.row_key(), &self.0.row)?;
        map.serialize_entry("doors", self.0.doors.as_slice())?;
        map.end()
    }
}

struct CyclesField<'a>(&'a Snapshot);

impl Serialize for CyclesField<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.0.cycles.len()))?;
        for cycle in &self.0.cycles {
            seq.serialize_element(&CycleField(cycle, self.0.key_style))?;
        }
        seq.end()
    }
}

struct CycleField<'a>(&'a [Coord], KeyStyle);

impl Serialize for CycleField<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
        for &coord in self.0 {
            seq.serialize_element(&PointField(coord, self.1))?;
        }
        seq.end()
    }
}

struct PointField(Coord, KeyStyle);

impl Serialize for PointField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(self.1.col_key(), &self.0.col)?;
        map.serialize_entry(self.1.row_key(), &self.0.row)?;
        map.end()
    }
}
