//! The Markov edge-swap kernel.
//!
//! One swap removes two existing edges `u–v` and `x–y` and inserts
//! `u–x, v–y` (or `u–y, v–x`), changing every endpoint's degree by
//! `-1 + 1 = 0`. Repeated swaps therefore walk the space of 2-regular
//! subgraphs without ever leaving it.
//!
//! Randomness is an injected dependency: both entry points are generic
//! over [`rand::Rng`], so tests drive them with a seeded `ChaCha8Rng`
//! while the server passes `thread_rng()`.

use crate::lattice::Lattice;
use hexweave_core::{Coord, Direction};
use rand::Rng;

/// Attempt budget multiplier for [`Lattice::scramble`].
const ATTEMPTS_PER_STEP: u64 = 20;

impl Lattice {
    /// One swap attempt. Returns `true` iff the lattice was mutated.
    ///
    /// Samples an edge endpoint `u` with a door to `v`, an endpoint `x`
    /// with a door to `y`, and tries the two rewirings `(u–x, v–y)` then
    /// `(u–y, v–x)`. An attempt fails silently when a sampled cell has no
    /// doors, the four endpoints are not pairwise distinct, a paired cell
    /// is not adjacent, or a replacement edge already exists. On success
    /// the four door writes happen together under the caller's exclusive
    /// access, so no observer sees a partial rewire.
    pub fn attempt_swap<R: Rng>(&mut self, rng: &mut R) -> bool {
        let u = self.sample_cell(rng);
        let u_doors = self.doors_at(u);
        if u_doors.is_empty() {
            return false;
        }
        let d_uv = u_doors[rng.gen_range(0..u_doors.len())];
        let v = self.neighbours.step(u, d_uv);

        let x = self.sample_cell(rng);
        let x_doors = self.doors_at(x);
        if x_doors.is_empty() {
            return false;
        }
        let d_xy = x_doors[rng.gen_range(0..x_doors.len())];
        let y = self.neighbours.step(x, d_xy);

        // All four endpoints must be distinct cells.
        if u == v || u == x || u == y || v == x || v == y || x == y {
            return false;
        }

        // Pairing A: (u, x) and (v, y); pairing B: (u, y) and (v, x).
        self.try_rewire(u, v, d_uv, x, d_xy, x, y) || self.try_rewire(u, v, d_uv, x, d_xy, y, x)
    }

    /// Run up to `steps` successful swaps, bounded by `20 · steps`
    /// attempts. Returns the number of swaps performed, in `[0, steps]`.
    pub fn scramble<R: Rng>(&mut self, steps: u32, rng: &mut R) -> u32 {
        let budget = steps as u64 * ATTEMPTS_PER_STEP;
        let mut swaps = 0u32;
        let mut attempts = 0u64;
        while swaps < steps && attempts < budget {
            attempts += 1;
            if self.attempt_swap(rng) {
                swaps += 1;
            }
        }
        swaps
    }

    /// Uniformly sample one cell.
    fn sample_cell<R: Rng>(&self, rng: &mut R) -> Coord {
        let size = self.size as usize;
        let idx = rng.gen_range(0..self.cell_count());
        Coord::new((idx / size) as u16, (idx % size) as u16)
    }

    /// Rewire `u–v, x–y` into `u–u_target, v–v_target` if both new edges
    /// are realizable: each pair adjacent and not already connected.
    #[allow(clippy::too_many_arguments)]
    fn try_rewire(
        &mut self,
        u: Coord,
        v: Coord,
        d_uv: Direction,
        x: Coord,
        d_xy: Direction,
        u_target: Coord,
        v_target: Coord,
    ) -> bool {
        let Some(d_u) = self.neighbours.direction_between(u, u_target) else {
            return false;
        };
        let Some(d_v) = self.neighbours.direction_between(v, v_target) else {
            return false;
        };
        if self.mask_at(u).contains(d_u) || self.mask_at(v).contains(d_v) {
            return false;
        }
        self.remove_at(u, d_uv);
        self.remove_at(x, d_xy);
        self.add_at(u, d_u);
        self.add_at(v, d_v);
        true
    }
}
