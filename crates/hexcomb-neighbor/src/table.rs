//! Parity lookup tables: hard-coded neighbor deltas per lane class.
//!
//! Each table lists six `(Δcol, Δrow)` steps in axial direction order
//! (E, NE, NW, W, SW, SE), derived by pushing the six axial directions
//! through the parity conversion for each lane class. The right table for
//! a tile depends on whether its staggered lane (column for `*Q`, row for
//! `*R`) is even or odd.

use hexcomb_core::{GridSpec, Offset, Parity};
use smallvec::SmallVec;

/// Column-shifted layouts, even-q conversion. Index 0: even columns,
/// index 1: odd columns.
const EVEN_Q_TABLES: [[(i32, i32); 6]; 2] = [
    [(1, 0), (1, -1), (0, -1), (-1, -1), (-1, 0), (0, 1)],
    [(1, 1), (1, 0), (0, -1), (-1, 0), (-1, 1), (0, 1)],
];

/// Column-shifted layouts, odd-q conversion. The lane classes swap
/// relative to even-q: which columns are displaced flips.
const ODD_Q_TABLES: [[(i32, i32); 6]; 2] = [
    [(1, 1), (1, 0), (0, -1), (-1, 0), (-1, 1), (0, 1)],
    [(1, 0), (1, -1), (0, -1), (-1, -1), (-1, 0), (0, 1)],
];

/// Row-shifted layouts, odd-r conversion. Index 0: even rows, index 1:
/// odd rows (the rows displaced half a column).
const ODD_R_TABLES: [[(i32, i32); 6]; 2] = [
    [(1, 0), (0, -1), (-1, -1), (-1, 0), (-1, 1), (0, 1)],
    [(1, 0), (1, -1), (0, -1), (-1, 0), (0, 1), (1, 1)],
];

/// Row-shifted layouts, even-r conversion. Lane classes swapped relative
/// to odd-r.
const EVEN_R_TABLES: [[(i32, i32); 6]; 2] = [
    [(1, 0), (1, -1), (0, -1), (-1, 0), (0, 1), (1, 1)],
    [(1, 0), (0, -1), (-1, -1), (-1, 0), (-1, 1), (0, 1)],
];

/// The delta table that applies to `at` under `parity`.
pub(crate) fn deltas_for(parity: Parity, at: Offset) -> &'static [(i32, i32); 6] {
    let tables = match parity {
        Parity::EvenQ => &EVEN_Q_TABLES,
        Parity::OddQ => &ODD_Q_TABLES,
        Parity::OddR => &ODD_R_TABLES,
        Parity::EvenR => &EVEN_R_TABLES,
    };
    &tables[parity.stagger_class(at)]
}

/// Table-based neighbor lookup: apply the lane's six deltas and keep the
/// in-bounds results.
pub(crate) fn neighbors(spec: &GridSpec, at: Offset) -> SmallVec<[Offset; 6]> {
    if !spec.in_bounds(at) {
        return SmallVec::new();
    }
    deltas_for(spec.parity(), at)
        .iter()
        .map(|&(dc, dr)| at.translate(dc, dr))
        .filter(|n| spec.in_bounds(*n))
        .collect()
}
