//! Benchmark profiles for the hexcomb micro-benchmarks.
//!
//! Provides pre-built grids and deterministic obstacle layouts:
//!
//! - [`reference_grid`]: 100×100 (10K tiles)
//! - [`stress_grid`]: 316×316 (~100K tiles)
//! - [`scattered_obstacles`]: deterministic blocked-tile placement via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use hexcomb_core::{GridSpec, Offset, Orientation, Parity};

/// A 100×100 pointy-top odd-r grid (10K tiles).
pub fn reference_grid() -> GridSpec {
    GridSpec::new(Orientation::PointyTop, Parity::OddR, 28.0, 100, 100).unwrap()
}

/// A 316×316 flat-top even-q grid (~100K tiles), 10x the reference.
pub fn stress_grid() -> GridSpec {
    GridSpec::new(Orientation::FlatTop, Parity::EvenQ, 28.0, 316, 316).unwrap()
}

/// Generate `count` deterministic blocked tiles, never touching the two
/// opposite corners so corner-to-corner path queries stay meaningful.
pub fn scattered_obstacles(spec: &GridSpec, count: usize, seed: u64) -> Vec<Offset> {
    let cols = spec.columns() as u64;
    let rows = spec.rows() as u64;
    let start = Offset::new(0, 0);
    let goal = Offset::new(cols as i32 - 1, rows as i32 - 1);

    let mut blocked = Vec::with_capacity(count);
    let mut occupied = std::collections::HashSet::new();
    let mut i = 0u64;
    while blocked.len() < count && i < count as u64 * 8 {
        let h = seed
            .wrapping_mul(6364136223846793005)
            .wrapping_add(i.wrapping_mul(1442695040888963407));
        let tile = Offset::new((h % cols) as i32, ((h >> 32) % rows) as i32);
        i += 1;
        if tile == start || tile == goal || !occupied.insert(tile) {
            continue;
        }
        blocked.push(tile);
    }
    blocked
}
