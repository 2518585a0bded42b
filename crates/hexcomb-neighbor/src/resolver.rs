//! Strategy selection and per-grid caching.

use std::sync::OnceLock;

use hexcomb_core::{GridSpec, Offset};
use smallvec::SmallVec;

use crate::calibrate::{Calibration, HexDeltaSet};
use crate::{proximity, table};

/// How a [`NeighborResolver`] answers adjacency queries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Hard-coded delta tables keyed by the configured parity. Fastest,
    /// but silently wrong when the parity flag does not match the grid's
    /// true layout.
    ParityTable,
    /// Per-query search over a ±2 window, ranked by measured center
    /// distance. Parity-agnostic; the slowest of the three.
    ProximitySearch,
    /// One-time geometric calibration cached for the grid's lifetime,
    /// with parity-table fallback when measurement fails.
    #[default]
    CalibratedDeltas,
}

/// Answers adjacency queries for one grid.
///
/// The resolver is cheap to construct; calibration work (for
/// [`Strategy::CalibratedDeltas`]) runs on the first query and is cached
/// thereafter. Shared references are usable from multiple threads.
#[derive(Debug)]
pub struct NeighborResolver {
    spec: GridSpec,
    strategy: Strategy,
    calibration: OnceLock<Calibration>,
}

impl NeighborResolver {
    /// A resolver using the default strategy,
    /// [`Strategy::CalibratedDeltas`].
    pub fn new(spec: GridSpec) -> Self {
        Self::with_strategy(spec, Strategy::default())
    }

    /// A resolver using an explicitly chosen strategy.
    pub fn with_strategy(spec: GridSpec, strategy: Strategy) -> Self {
        Self {
            spec,
            strategy,
            calibration: OnceLock::new(),
        }
    }

    /// The grid this resolver answers for.
    pub fn spec(&self) -> &GridSpec {
        &self.spec
    }

    /// The strategy selected at construction.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// The tiles adjacent to `at`.
    ///
    /// Interior tiles get exactly six results; edge and corner tiles
    /// fewer. An out-of-bounds `at` yields an empty list.
    pub fn neighbors(&self, at: Offset) -> SmallVec<[Offset; 6]> {
        match self.strategy {
            Strategy::ParityTable => table::neighbors(&self.spec, at),
            Strategy::ProximitySearch => proximity::neighbors(&self.spec, at),
            Strategy::CalibratedDeltas => self.calibration().neighbors(&self.spec, at),
        }
    }

    /// Whether calibration failed and queries are served by the parity
    /// tables instead. Always `false` for the other strategies. Forces
    /// calibration if it has not run yet.
    pub fn used_fallback(&self) -> bool {
        match self.strategy {
            Strategy::CalibratedDeltas => self.calibration().is_fallback(),
            _ => false,
        }
    }

    /// The measured delta sets, indexed by lane class. `None` unless the
    /// strategy is [`Strategy::CalibratedDeltas`] and measurement
    /// succeeded. Forces calibration if it has not run yet.
    pub fn delta_sets(&self) -> Option<&[HexDeltaSet; 2]> {
        match self.strategy {
            Strategy::CalibratedDeltas => self.calibration().sets(),
            _ => None,
        }
    }

    fn calibration(&self) -> &Calibration {
        self.calibration
            .get_or_init(|| Calibration::derive(&self.spec))
    }
}
