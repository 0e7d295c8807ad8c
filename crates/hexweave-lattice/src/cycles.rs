//! Cycle decomposition of the 2-regular door graph.

use crate::lattice::Lattice;
use hexweave_core::Coord;

/// Result of a diagnostic walk scan: cycles that closed back on their
/// start, and walks that terminated without closing.
///
/// On a lattice satisfying the degree-two invariant, `dangling` is empty
/// and `closed` is the full cycle decomposition. Dangling walks only
/// appear on degenerate lattices (isolated cells, dead ends) and would be
/// silently folded into the plain [`Lattice::find_cycles`] output, so
/// this scan is the tool for inspecting a lattice suspected of violating
/// the invariant.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WalkScan {
    /// Walks whose final step returned to their starting cell.
    pub closed: Vec<Vec<Coord>>,
    /// Walks cut short by a missing door or a visited non-start cell.
    pub dangling: Vec<Vec<Coord>>,
}

impl Lattice {
    /// Decompose the door graph into its disjoint cycles.
    ///
    /// Scans start cells in canonical order (column-outer, row-inner) and
    /// walks each unvisited component, always taking the lowest-index
    /// door and using the second door to avoid backtracking. Under the
    /// degree-two invariant each walk is a simple cycle of length >= 3
    /// and every cell lands in exactly one cycle; both the cycle order
    /// and the intra-cycle order are fully deterministic.
    ///
    /// Terminates on any lattice. When the invariant is violated the
    /// degenerate fragments come back as partial, non-closed walks; use
    /// [`scan_walks`](Lattice::scan_walks) to tell those apart.
    pub fn find_cycles(&self) -> Vec<Vec<Coord>> {
        let mut cycles = Vec::new();
        self.walk_all(|walk, _closed| cycles.push(walk));
        cycles
    }

    /// Diagnostic variant of [`find_cycles`](Lattice::find_cycles) that
    /// separates closed cycles from dangling walks instead of merging
    /// them.
    pub fn scan_walks(&self) -> WalkScan {
        let mut scan = WalkScan::default();
        self.walk_all(|walk, closed| {
            if closed {
                scan.closed.push(walk);
            } else {
                scan.dangling.push(walk);
            }
        });
        scan
    }

    /// Walk every component once, invoking `sink` with each non-empty
    /// walk and whether it closed. One `size²`-capacity buffer is reused
    /// across walks and copied out per component.
    fn walk_all<F: FnMut(Vec<Coord>, bool)>(&self, mut sink: F) {
        let cell_count = self.cell_count();
        let mut visited = vec![false; cell_count];
        let mut buf: Vec<Coord> = Vec::with_capacity(cell_count);
        for col in 0..self.size {
            for row in 0..self.size {
                let start = Coord::new(col, row);
                if visited[start.index(self.size)] {
                    continue;
                }
                let closed = self.walk_from(start, &mut visited, &mut buf);
                if !buf.is_empty() {
                    sink(buf.clone(), closed);
                }
            }
        }
    }

    /// Walk from `start` until revisiting a cell or running out of doors.
    /// Fills `buf` with the walk and returns whether it closed back on
    /// `start`.
    fn walk_from(&self, start: Coord, visited: &mut [bool], buf: &mut Vec<Coord>) -> bool {
        buf.clear();
        let mut curr = start;
        let mut prev: Option<Coord> = None;
        loop {
            if visited[curr.index(self.size)] {
                // Back to our own start: closed. Anything else means we
                // ran into a previously extracted component.
                return curr == start;
            }
            visited[curr.index(self.size)] = true;
            buf.push(curr);

            let doors = self.doors_at(curr);
            let Some(&first) = doors.first() else {
                return false;
            };
            let mut next = self.neighbours.step(curr, first);
            if prev == Some(next) {
                // Lowest door points backwards; take the second if any.
                if let Some(&second) = doors.get(1) {
                    next = self.neighbours.step(curr, second);
                } else {
                    return false;
                }
            }
            prev = Some(curr);
            curr = next;
        }
    }
}
