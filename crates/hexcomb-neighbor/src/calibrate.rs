//! One-time geometric calibration of neighbor deltas.
//!
//! Instead of trusting the configured parity (the table strategy) or
//! re-measuring the grid on every query (the proximity strategy), the
//! calibrated strategy measures the grid once: it scans a ±2 window
//! around an interior reference tile, keeps candidates whose center
//! distance falls in the adjacency band, buckets their bearings into six
//! 60° sectors, and records the closest candidate per sector as that
//! direction's `(Δcol, Δrow)`.
//!
//! On a staggered offset layout a delta set is only valid for tiles whose
//! lane (column or row) shares the reference tile's parity, so
//! calibration runs twice — once per lane class — and queries select the
//! set matching their own class. Each set individually holds six
//! pairwise-distinct deltas ordered by bearing from east.

use hexcomb_core::{GridSpec, Offset, Orientation, Parity};
use hexcomb_geom::tile_center;
use smallvec::SmallVec;

use crate::proximity::adjacency_band;
use crate::table;

/// Six `(Δcol, Δrow)` neighbor deltas, ordered by bearing from east,
/// valid for tiles of one lane class of one grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HexDeltaSet {
    deltas: [(i32, i32); 6],
}

impl HexDeltaSet {
    /// The six deltas, ordered by bearing from east.
    pub fn deltas(&self) -> &[(i32, i32); 6] {
        &self.deltas
    }

    fn apply(&self, spec: &GridSpec, at: Offset) -> SmallVec<[Offset; 6]> {
        self.deltas
            .iter()
            .map(|&(dc, dr)| at.translate(dc, dr))
            .filter(|n| spec.in_bounds(*n))
            .collect()
    }
}

/// Result of calibrating a grid: either a measured delta set per lane
/// class, or the parity-table fallback.
#[derive(Clone, Debug)]
pub(crate) enum Calibration {
    /// Successful measurement; indexed by
    /// [`Parity::stagger_class`].
    Measured([HexDeltaSet; 2]),
    /// Derivation could not find six distinct directions per class; the
    /// parity tables answer queries instead.
    Fallback,
}

impl Calibration {
    /// Calibrate a grid. Runs once per grid; the resolver caches the
    /// result for the grid's lifetime.
    pub(crate) fn derive(spec: &GridSpec) -> Calibration {
        match Self::try_measure(spec) {
            Some(sets) => Calibration::Measured(sets),
            None => {
                log::warn!(
                    "hex delta calibration fell back to parity tables for {}x{} {:?}/{:?} grid; \
                     the grid is too small or its geometry did not yield six directions",
                    spec.columns(),
                    spec.rows(),
                    spec.orientation(),
                    spec.parity(),
                );
                Calibration::Fallback
            }
        }
    }

    fn try_measure(spec: &GridSpec) -> Option<[HexDeltaSet; 2]> {
        let (a, b) = reference_tiles(spec)?;
        let set_a = HexDeltaSet {
            deltas: calibrate_at(spec, a)?,
        };
        let set_b = HexDeltaSet {
            deltas: calibrate_at(spec, b)?,
        };

        let parity = spec.parity();
        let mut sets = [set_a; 2];
        sets[parity.stagger_class(a)] = set_a;
        sets[parity.stagger_class(b)] = set_b;
        // Adjacent lanes always land in opposite classes.
        debug_assert_ne!(parity.stagger_class(a), parity.stagger_class(b));
        Some(sets)
    }

    pub(crate) fn neighbors(&self, spec: &GridSpec, at: Offset) -> SmallVec<[Offset; 6]> {
        if !spec.in_bounds(at) {
            return SmallVec::new();
        }
        match self {
            Calibration::Measured(sets) => {
                sets[spec.parity().stagger_class(at)].apply(spec, at)
            }
            Calibration::Fallback => table::neighbors(spec, at),
        }
    }

    pub(crate) fn is_fallback(&self) -> bool {
        matches!(self, Calibration::Fallback)
    }

    pub(crate) fn sets(&self) -> Option<&[HexDeltaSet; 2]> {
        match self {
            Calibration::Measured(sets) => Some(sets),
            Calibration::Fallback => None,
        }
    }
}

/// Pick one interior reference tile per lane class: a tile near the
/// origin corner with a full ring of in-bounds neighbors, and its
/// neighbor along the staggered axis. `None` when the grid has no such
/// pair (1-wide, 1-tall, or otherwise too small).
fn reference_tiles(spec: &GridSpec) -> Option<(Offset, Offset)> {
    let cols = spec.columns() as i32;
    let rows = spec.rows() as i32;
    if cols < 3 || rows < 3 {
        return None;
    }
    let c0 = 2.min(cols - 2);
    let r0 = 2.min(rows - 2);
    let first = Offset::new(c0, r0);

    let second = match spec.parity() {
        Parity::EvenQ | Parity::OddQ => {
            if c0 + 1 <= cols - 2 {
                Offset::new(c0 + 1, r0)
            } else if c0 - 1 >= 1 {
                Offset::new(c0 - 1, r0)
            } else {
                return None;
            }
        }
        Parity::EvenR | Parity::OddR => {
            if r0 + 1 <= rows - 2 {
                Offset::new(c0, r0 + 1)
            } else if r0 - 1 >= 1 {
                Offset::new(c0, r0 - 1)
            } else {
                return None;
            }
        }
    };
    Some((first, second))
}

/// Measure the six direction deltas at one reference tile, or `None` if
/// fewer than six sectors produced a distinct winner.
fn calibrate_at(spec: &GridSpec, reference: Offset) -> Option<[(i32, i32); 6]> {
    let p0 = tile_center(spec, reference);
    let (lo, hi) = adjacency_band(spec.hex_radius());

    // Sector centers follow the orientation: pointy-top neighbors bear
    // 0°, 60°, …; flat-top neighbors bear 30°, 90°, …. Centering the
    // buckets on the expected bearings keeps measurements away from
    // sector boundaries.
    let sector_offset = match spec.orientation() {
        Orientation::PointyTop => 0.0,
        Orientation::FlatTop => 30.0,
    };

    let mut best: [Option<(f64, (i32, i32))>; 6] = [None; 6];
    for drow in -2i32..=2 {
        for dcol in -2i32..=2 {
            if dcol == 0 && drow == 0 {
                continue;
            }
            let cand = reference.translate(dcol, drow);
            if !spec.in_bounds(cand) {
                continue;
            }
            let d = tile_center(spec, cand) - p0;
            let d2 = d.length_squared();
            if d2 < lo || d2 > hi {
                continue;
            }
            let mut deg = d.y.atan2(d.x).to_degrees();
            if deg < 0.0 {
                deg += 360.0;
            }
            let sector = (((deg - sector_offset + 30.0) / 60.0).floor() as usize) % 6;
            if best[sector].is_none_or(|(b2, _)| d2 < b2) {
                best[sector] = Some((d2, (dcol, drow)));
            }
        }
    }

    let mut deltas = [(0, 0); 6];
    for (i, slot) in best.iter().enumerate() {
        let (_, delta) = (*slot)?;
        deltas[i] = delta;
    }
    for i in 0..6 {
        for j in i + 1..6 {
            if deltas[i] == deltas[j] {
                return None;
            }
        }
    }
    Some(deltas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table;

    const ALL: [Parity; 4] = [Parity::EvenQ, Parity::OddQ, Parity::EvenR, Parity::OddR];

    fn spec(parity: Parity, orientation: Orientation, cols: u32, rows: u32) -> GridSpec {
        GridSpec::new(orientation, parity, 28.0, cols, rows).unwrap()
    }

    #[test]
    fn measured_sets_match_the_parity_tables() {
        // On a well-formed grid the measured geometry and the configured
        // parity agree, so calibration must reproduce the tables as
        // unordered sets.
        for parity in ALL {
            for orientation in [Orientation::PointyTop, Orientation::FlatTop] {
                let s = spec(parity, orientation, 7, 7);
                let cal = Calibration::derive(&s);
                assert!(!cal.is_fallback(), "{parity:?}/{orientation:?}");
                for at in [Offset::new(3, 3), Offset::new(4, 3), Offset::new(3, 4)] {
                    let mut measured: Vec<Offset> = cal.neighbors(&s, at).to_vec();
                    let mut tabled: Vec<Offset> = table::neighbors(&s, at).to_vec();
                    measured.sort();
                    tabled.sort();
                    assert_eq!(measured, tabled, "{parity:?}/{orientation:?} at {at}");
                }
            }
        }
    }

    #[test]
    fn delta_sets_are_distinct_per_lane_class() {
        let s = spec(Parity::OddR, Orientation::PointyTop, 7, 7);
        let cal = Calibration::derive(&s);
        let Calibration::Measured(sets) = cal else {
            panic!("expected measurement to succeed");
        };
        assert_ne!(sets[0], sets[1]);
        for set in sets {
            let d = set.deltas();
            for i in 0..6 {
                for j in i + 1..6 {
                    assert_ne!(d[i], d[j], "deltas must be pairwise distinct");
                }
            }
        }
    }

    #[test]
    fn one_wide_grid_falls_back() {
        let s = spec(Parity::EvenQ, Orientation::FlatTop, 1, 12);
        let cal = Calibration::derive(&s);
        assert!(cal.is_fallback());
        // Fallback still answers queries via the tables.
        let n = cal.neighbors(&s, Offset::new(0, 5));
        assert!(!n.is_empty());
        assert!(n.iter().all(|t| s.in_bounds(*t)));
    }

    #[test]
    fn one_tall_grid_falls_back() {
        let s = spec(Parity::OddR, Orientation::PointyTop, 12, 1);
        assert!(Calibration::derive(&s).is_fallback());
    }

    #[test]
    fn minimum_viable_grid_measures() {
        // 4×3 is the smallest column-parity grid with interior tiles in
        // both lane classes.
        let s = spec(Parity::OddQ, Orientation::FlatTop, 4, 3);
        assert!(!Calibration::derive(&s).is_fallback());
        let s = spec(Parity::OddR, Orientation::PointyTop, 3, 4);
        assert!(!Calibration::derive(&s).is_fallback());
    }

    #[test]
    fn interior_tiles_get_six_deltas() {
        let s = spec(Parity::EvenR, Orientation::PointyTop, 9, 9);
        let cal = Calibration::derive(&s);
        for col in 1..8 {
            for row in 1..8 {
                assert_eq!(cal.neighbors(&s, Offset::new(col, row)).len(), 6);
            }
        }
    }
}
