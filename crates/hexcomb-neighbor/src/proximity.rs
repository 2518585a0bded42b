//! Geometric proximity search: neighbors by measured tile-center distance.
//!
//! Examines every tile within a ±2 window of the origin (24 candidates),
//! measures the Euclidean pixel distance between tile centers through the
//! grid's own forward transform, and keeps the nearest tiles inside the
//! adjacency band. The parity flag is never consulted directly — centers
//! come from the same transform the renderer uses — which makes this the
//! most robust strategy against layout misconfiguration.

use hexcomb_core::{GridSpec, Offset};
use hexcomb_geom::tile_center;
use smallvec::SmallVec;

/// Half-width of the candidate window; ±2 is plenty for hex layouts.
const WINDOW: i32 = 2;

/// Squared-distance band that separates true neighbors (center spacing
/// `√3·R`, squared `3R²`) from the second ring (closest spacing `3R`,
/// squared `9R²`). Derived from the declared radius, not tuned constants.
pub(crate) fn adjacency_band(radius: f64) -> (f64, f64) {
    let spacing2 = 3.0 * radius * radius;
    (0.25 * spacing2, 2.25 * spacing2)
}

/// Nearest-first neighbor search around `at`.
///
/// Candidates are ranked by squared center distance (ties broken by row
/// then column for determinism), clipped to the grid, and filtered to the
/// adjacency band so edge tiles never pad their neighbor list with
/// second-ring tiles. Returns up to six coordinates, nearest first.
pub(crate) fn neighbors(spec: &GridSpec, at: Offset) -> SmallVec<[Offset; 6]> {
    if !spec.in_bounds(at) {
        return SmallVec::new();
    }
    let origin = tile_center(spec, at);
    let (lo, hi) = adjacency_band(spec.hex_radius());

    // Window offsets are pairwise distinct, so no dedup pass is needed.
    let mut candidates: Vec<(f64, Offset)> = Vec::with_capacity(24);
    for drow in -WINDOW..=WINDOW {
        for dcol in -WINDOW..=WINDOW {
            if dcol == 0 && drow == 0 {
                continue;
            }
            let n = at.translate(dcol, drow);
            if !spec.in_bounds(n) {
                continue;
            }
            let d2 = tile_center(spec, n).distance_squared(origin);
            if d2 < lo || d2 > hi {
                continue;
            }
            candidates.push((d2, n));
        }
    }

    candidates.sort_by(|a, b| {
        a.0.total_cmp(&b.0)
            .then_with(|| (a.1.row, a.1.col).cmp(&(b.1.row, b.1.col)))
    });
    candidates.into_iter().take(6).map(|(_, n)| n).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexcomb_core::{Orientation, Parity};
    use hexcomb_geom::tile_center;

    fn spec(parity: Parity, orientation: Orientation) -> GridSpec {
        GridSpec::new(orientation, parity, 28.0, 5, 5).unwrap()
    }

    #[test]
    fn interior_tile_has_exactly_six() {
        for parity in [Parity::EvenQ, Parity::OddQ, Parity::EvenR, Parity::OddR] {
            for orientation in [Orientation::PointyTop, Orientation::FlatTop] {
                let s = spec(parity, orientation);
                let n = neighbors(&s, Offset::new(2, 2));
                assert_eq!(n.len(), 6, "{parity:?}/{orientation:?}");
            }
        }
    }

    #[test]
    fn corner_is_not_padded_with_second_ring() {
        // A corner tile has 2 or 3 true neighbors depending on parity;
        // the band filter keeps second-ring tiles out of the result.
        let s = spec(Parity::OddR, Orientation::PointyTop);
        let origin = tile_center(&s, Offset::new(0, 0));
        let n = neighbors(&s, Offset::new(0, 0));
        assert!(n.len() < 6);
        for tile in &n {
            let d = tile_center(&s, *tile).distance(origin);
            assert!(
                (d - 28.0 * hexcomb_geom::SQRT_3).abs() < 1e-6,
                "corner neighbor {tile} at non-adjacent distance {d}"
            );
        }
    }

    #[test]
    fn results_are_nearest_first_and_in_bounds() {
        let s = spec(Parity::EvenQ, Orientation::FlatTop);
        let at = Offset::new(1, 0);
        let origin = tile_center(&s, at);
        let n = neighbors(&s, at);
        let mut last = 0.0f64;
        for tile in &n {
            assert!(s.in_bounds(*tile));
            let d = tile_center(&s, *tile).distance_squared(origin);
            assert!(d >= last, "not sorted nearest-first");
            last = d;
        }
    }

    #[test]
    fn out_of_bounds_origin_yields_nothing() {
        let s = spec(Parity::EvenQ, Orientation::FlatTop);
        assert!(neighbors(&s, Offset::new(5, 2)).is_empty());
    }

    #[test]
    fn never_returns_origin() {
        let s = spec(Parity::OddR, Orientation::PointyTop);
        for at in s.iter_offsets() {
            assert!(!neighbors(&s, at).contains(&at));
        }
    }
}
