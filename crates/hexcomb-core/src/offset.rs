//! Offset (column/row) grid-storage coordinates.

use crate::axial::Axial;
use crate::layout::Parity;
use std::fmt;

/// An offset coordinate `(col, row)` indexing a host's tile storage.
///
/// Immutable value type; equality and hashing are by `(col, row)`.
/// Negative values are representable (they arise transiently when a delta
/// steps off the grid edge) but every offset the core *returns* has been
/// bounds-filtered against its [`GridSpec`](crate::GridSpec).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Offset {
    /// Column index.
    pub col: i32,
    /// Row index.
    pub row: i32,
}

impl Offset {
    /// Create an offset coordinate.
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Convert to an axial coordinate under the given parity scheme.
    pub fn to_axial(self, parity: Parity) -> Axial {
        parity.offset_to_axial(self)
    }

    /// Apply a `(Δcol, Δrow)` step.
    pub const fn translate(self, dcol: i32, drow: i32) -> Offset {
        Offset::new(self.col + dcol, self.row + drow)
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}
