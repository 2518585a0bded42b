//! Neighbor resolution for hex grids.
//!
//! A [`NeighborResolver`] answers "which tiles are adjacent to this one"
//! for a fixed [`GridSpec`](hexcomb_core::GridSpec), through one of three
//! interchangeable strategies selected at construction:
//!
//! 1. [`Strategy::ParityTable`] — hard-coded delta tables keyed by lane
//!    parity. O(1), but correct only when the configured parity matches
//!    the grid's true visual layout.
//! 2. [`Strategy::ProximitySearch`] — ranks a ±2 window of candidates by
//!    pixel distance between tile centers. Parity-agnostic and therefore
//!    self-correcting, at O(w log w) per query.
//! 3. [`Strategy::CalibratedDeltas`] — measures the geometry once per
//!    grid, buckets candidate bearings into six 60° sectors, and caches
//!    the winning deltas. Table-lookup speed after a one-time cost, with
//!    the proximity strategy's robustness. This is the default.
//!
//! When calibration cannot find six distinct directions (1-wide or 1-tall
//! grids, or grids too small to hold an interior reference tile) the
//! resolver falls back to the parity tables, emits a `log::warn!`, and
//! reports the condition through
//! [`used_fallback`](NeighborResolver::used_fallback).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod calibrate;
mod proximity;
mod resolver;
mod table;

pub use calibrate::HexDeltaSet;
pub use resolver::{NeighborResolver, Strategy};
