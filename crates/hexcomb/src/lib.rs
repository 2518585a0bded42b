//! Hexcomb: hexagonal tile grid math for games and simulations.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Hexcomb sub-crates. For most users, adding `hexcomb` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use hexcomb::prelude::*;
//!
//! // An oracle where every in-bounds tile is traversable. Real hosts
//! // back this with terrain data or occupancy tracking.
//! struct Open(GridSpec);
//! impl Walkability for Open {
//!     fn in_bounds(&self, at: Offset) -> bool {
//!         self.0.in_bounds(at)
//!     }
//!     fn is_walkable(&self, at: Offset) -> bool {
//!         self.0.in_bounds(at)
//!     }
//! }
//!
//! let spec = GridSpec::new(Orientation::PointyTop, Parity::OddR, 28.0, 8, 8)?;
//! let resolver = NeighborResolver::new(spec);
//! assert_eq!(resolver.neighbors(Offset::new(3, 3)).len(), 6);
//!
//! let oracle = Open(spec);
//! let finder = Pathfinder::new(&resolver, &oracle);
//! let outcome = finder.find_path(Offset::new(0, 0), Offset::new(7, 7));
//! assert!(outcome.path().is_some());
//! # Ok::<(), GridError>(())
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for items not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `hexcomb-core` | Coordinates, parity conversions, grid specification, errors |
//! | [`geom`] | `hexcomb-geom` | Pixel projection, hit testing, corner geometry |
//! | [`neighbor`] | `hexcomb-neighbor` | Neighbor resolution strategies and calibration |
//! | [`path`] | `hexcomb-path` | Walkability oracle trait and BFS pathfinding |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Coordinate types, parity conversions, and the grid specification
/// (`hexcomb-core`).
///
/// Contains [`types::Axial`], [`types::Offset`], [`types::FracAxial`],
/// the [`types::Parity`] conversions, and [`types::GridSpec`].
pub use hexcomb_core as types;

/// Pixel-space geometry (`hexcomb-geom`).
///
/// Forward and inverse hex↔pixel projection, [`geom::tile_center`],
/// [`geom::offset_at_point`] hit testing, and [`geom::hex_corners`] for
/// rendering outlines.
pub use hexcomb_geom as geom;

/// Neighbor resolution (`hexcomb-neighbor`).
///
/// The [`neighbor::NeighborResolver`] and its three interchangeable
/// [`neighbor::Strategy`] values, plus the measured
/// [`neighbor::HexDeltaSet`] produced by calibration.
pub use hexcomb_neighbor as neighbor;

/// Pathfinding (`hexcomb-path`).
///
/// The host-implemented [`path::Walkability`] oracle and the BFS
/// [`path::Pathfinder`] with its budgeted [`path::PathOutcome`] verdicts.
pub use hexcomb_path as path;

/// Common imports for typical Hexcomb usage.
///
/// ```rust
/// use hexcomb::prelude::*;
/// ```
pub mod prelude {
    // Coordinates and grid description
    pub use hexcomb_core::{
        Axial, FracAxial, GridError, GridSpec, Offset, Orientation, Parity, AXIAL_DIRECTIONS,
    };

    // Pixel geometry
    pub use hexcomb_geom::{hex_corners, offset_at_point, tile_center};

    // Neighbor resolution
    pub use hexcomb_neighbor::{HexDeltaSet, NeighborResolver, Strategy};

    // Pathfinding
    pub use hexcomb_path::{PathOutcome, Pathfinder, Walkability};
}
