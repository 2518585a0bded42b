//! Mock walkability oracles shared by member-crate tests.
//!
//! Both oracles are defensive: they answer `false` for out-of-bounds
//! input even though the pathfinder never asks about tiles the resolver
//! has not already bounds-checked.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::collections::HashSet;

use hexcomb_core::{GridSpec, Offset};
use hexcomb_path::Walkability;

/// An oracle where every in-bounds tile is walkable.
#[derive(Clone, Copy, Debug)]
pub struct OpenGrid {
    spec: GridSpec,
}

impl OpenGrid {
    /// An open oracle over `spec`.
    pub fn new(spec: GridSpec) -> Self {
        Self { spec }
    }
}

impl Walkability for OpenGrid {
    fn in_bounds(&self, at: Offset) -> bool {
        self.spec.in_bounds(at)
    }

    fn is_walkable(&self, at: Offset) -> bool {
        self.spec.in_bounds(at)
    }
}

/// An oracle backed by an explicit set of blocked tiles.
#[derive(Clone, Debug)]
pub struct MaskOracle {
    spec: GridSpec,
    blocked: HashSet<Offset>,
}

impl MaskOracle {
    /// A mask oracle with no blocked tiles.
    pub fn new(spec: GridSpec) -> Self {
        Self {
            spec,
            blocked: HashSet::new(),
        }
    }

    /// Mark `at` as non-walkable. Blocking an out-of-bounds tile is a
    /// no-op in effect, since such tiles are already non-walkable.
    pub fn block(mut self, at: Offset) -> Self {
        self.blocked.insert(at);
        self
    }

    /// Mark every tile in `tiles` as non-walkable.
    pub fn block_all(mut self, tiles: impl IntoIterator<Item = Offset>) -> Self {
        self.blocked.extend(tiles);
        self
    }
}

impl Walkability for MaskOracle {
    fn in_bounds(&self, at: Offset) -> bool {
        self.spec.in_bounds(at)
    }

    fn is_walkable(&self, at: Offset) -> bool {
        self.spec.in_bounds(at) && !self.blocked.contains(&at)
    }
}
