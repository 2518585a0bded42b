//! Axial hex coordinates and cube distance.

use crate::layout::Parity;
use crate::offset::Offset;
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// The six axial direction vectors, in the order E, NE, NW, W, SW, SE.
///
/// Compass names follow screen convention (`r` increasing downward on a
/// pointy-top layout). Adding a direction to an [`Axial`] yields the
/// adjacent cell in that direction.
pub const AXIAL_DIRECTIONS: [Axial; 6] = [
    Axial { q: 1, r: 0 },   // E
    Axial { q: 1, r: -1 },  // NE
    Axial { q: 0, r: -1 },  // NW
    Axial { q: -1, r: 0 },  // W
    Axial { q: -1, r: 1 },  // SW
    Axial { q: 0, r: 1 },   // SE
];

/// An axial hex coordinate `(q, r)` with implicit cube component `s = -q - r`.
///
/// Immutable value type; equality and hashing are by `(q, r)`.
///
/// # Examples
///
/// ```
/// use hexcomb_core::Axial;
///
/// let a = Axial::new(2, 1);
/// assert_eq!(a.s(), -3);
/// assert_eq!(a.distance(Axial::new(4, 0)), 2);
/// assert_eq!(a.neighbors().len(), 6);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Axial {
    /// Column-like cube component.
    pub q: i32,
    /// Row-like cube component.
    pub r: i32,
}

impl Axial {
    /// Create an axial coordinate.
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// The implicit third cube component, `-q - r`.
    pub const fn s(self) -> i32 {
        -self.q - self.r
    }

    /// Cube distance to `other`: `max(|dq|, |dr|, |ds|)`.
    ///
    /// Equals the graph geodesic on an unobstructed hex grid, which makes
    /// it the lower bound BFS path lengths are checked against.
    pub fn distance(self, other: Axial) -> i32 {
        let dq = (self.q - other.q).abs();
        let dr = (self.r - other.r).abs();
        let ds = (self.s() - other.s()).abs();
        dq.max(dr).max(ds)
    }

    /// The six adjacent axial coordinates, in [`AXIAL_DIRECTIONS`] order.
    pub fn neighbors(self) -> [Axial; 6] {
        AXIAL_DIRECTIONS.map(|d| self + d)
    }

    /// Convert to an offset coordinate under the given parity scheme.
    pub fn to_offset(self, parity: Parity) -> Offset {
        parity.axial_to_offset(self)
    }
}

impl Add for Axial {
    type Output = Axial;
    fn add(self, rhs: Axial) -> Axial {
        Axial::new(self.q + rhs.q, self.r + rhs.r)
    }
}

impl Sub for Axial {
    type Output = Axial;
    fn sub(self, rhs: Axial) -> Axial {
        Axial::new(self.q - rhs.q, self.r - rhs.r)
    }
}

impl Mul<i32> for Axial {
    type Output = Axial;
    fn mul(self, rhs: i32) -> Axial {
        Axial::new(self.q * rhs, self.r * rhs)
    }
}

impl fmt::Display for Axial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.q, self.r)
    }
}
