//! Validated, immutable grid configuration.

use crate::error::GridError;
use crate::layout::{Orientation, Parity};
use crate::offset::Offset;

/// Immutable configuration for one hex grid.
///
/// Created once when a grid is instantiated and shared read-only with the
/// transform, neighbor, and pathfinding layers. Fixing the orientation and
/// parity here — rather than passing them per call — is what keeps every
/// layer of a grid on the same layout convention.
///
/// # Examples
///
/// ```
/// use hexcomb_core::{GridError, GridSpec, Offset, Orientation, Parity};
///
/// let spec = GridSpec::new(Orientation::PointyTop, Parity::EvenQ, 28.0, 5, 5).unwrap();
/// assert!(spec.in_bounds(Offset::new(4, 4)));
/// assert!(!spec.in_bounds(Offset::new(5, 0)));
///
/// assert!(matches!(
///     GridSpec::new(Orientation::PointyTop, Parity::EvenQ, 0.0, 5, 5),
///     Err(GridError::InvalidRadius { .. })
/// ));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridSpec {
    orientation: Orientation,
    parity: Parity,
    hex_radius: f64,
    columns: u32,
    rows: u32,
}

impl GridSpec {
    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a validated grid configuration.
    ///
    /// Returns [`GridError::InvalidRadius`] for a non-finite or
    /// non-positive `hex_radius`, [`GridError::EmptyGrid`] when either
    /// dimension is 0, and [`GridError::DimensionTooLarge`] when either
    /// exceeds [`MAX_DIM`](Self::MAX_DIM).
    pub fn new(
        orientation: Orientation,
        parity: Parity,
        hex_radius: f64,
        columns: u32,
        rows: u32,
    ) -> Result<Self, GridError> {
        if !hex_radius.is_finite() || hex_radius <= 0.0 {
            return Err(GridError::InvalidRadius { value: hex_radius });
        }
        if columns == 0 || rows == 0 {
            return Err(GridError::EmptyGrid);
        }
        if columns > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "columns",
                value: columns,
                max: Self::MAX_DIM,
            });
        }
        if rows > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "rows",
                value: rows,
                max: Self::MAX_DIM,
            });
        }
        Ok(Self {
            orientation,
            parity,
            hex_radius,
            columns,
            rows,
        })
    }

    /// Grid orientation.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Offset parity scheme.
    pub fn parity(&self) -> Parity {
        self.parity
    }

    /// Hex circumradius (center to corner) in pixels.
    pub fn hex_radius(&self) -> f64 {
        self.hex_radius
    }

    /// Number of columns.
    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Total number of tiles.
    pub fn tile_count(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    /// Whether an offset coordinate lies within the grid.
    pub fn in_bounds(&self, at: Offset) -> bool {
        at.col >= 0
            && at.col < self.columns as i32
            && at.row >= 0
            && at.row < self.rows as i32
    }

    /// All in-bounds offsets in row-major order (row outer, column inner).
    ///
    /// Two calls return the same sequence; useful for deterministic
    /// whole-grid sweeps in hosts and tests.
    pub fn iter_offsets(&self) -> impl Iterator<Item = Offset> + '_ {
        (0..self.rows as i32)
            .flat_map(move |row| (0..self.columns as i32).map(move |col| Offset::new(col, row)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(cols: u32, rows: u32) -> GridSpec {
        GridSpec::new(Orientation::PointyTop, Parity::OddR, 28.0, cols, rows).unwrap()
    }

    #[test]
    fn rejects_zero_radius() {
        let err = GridSpec::new(Orientation::FlatTop, Parity::EvenQ, 0.0, 3, 3).unwrap_err();
        assert!(matches!(err, GridError::InvalidRadius { value } if value == 0.0));
    }

    #[test]
    fn rejects_negative_and_nan_radius() {
        assert!(GridSpec::new(Orientation::FlatTop, Parity::EvenQ, -2.0, 3, 3).is_err());
        assert!(GridSpec::new(Orientation::FlatTop, Parity::EvenQ, f64::NAN, 3, 3).is_err());
    }

    #[test]
    fn rejects_empty_grid() {
        assert!(matches!(
            GridSpec::new(Orientation::FlatTop, Parity::EvenQ, 1.0, 0, 3),
            Err(GridError::EmptyGrid)
        ));
        assert!(matches!(
            GridSpec::new(Orientation::FlatTop, Parity::EvenQ, 1.0, 3, 0),
            Err(GridError::EmptyGrid)
        ));
    }

    #[test]
    fn rejects_dims_exceeding_i32_max() {
        let big = i32::MAX as u32 + 1;
        assert!(matches!(
            GridSpec::new(Orientation::FlatTop, Parity::EvenQ, 1.0, big, 1),
            Err(GridError::DimensionTooLarge { name: "columns", .. })
        ));
        assert!(matches!(
            GridSpec::new(Orientation::FlatTop, Parity::EvenQ, 1.0, 1, big),
            Err(GridError::DimensionTooLarge { name: "rows", .. })
        ));
    }

    #[test]
    fn bounds_are_half_open() {
        let s = spec(5, 4);
        assert!(s.in_bounds(Offset::new(0, 0)));
        assert!(s.in_bounds(Offset::new(4, 3)));
        assert!(!s.in_bounds(Offset::new(5, 3)));
        assert!(!s.in_bounds(Offset::new(4, 4)));
        assert!(!s.in_bounds(Offset::new(-1, 0)));
    }

    #[test]
    fn iter_offsets_is_row_major_and_complete() {
        let s = spec(3, 2);
        let all: Vec<Offset> = s.iter_offsets().collect();
        assert_eq!(all.len(), s.tile_count());
        assert_eq!(all[0], Offset::new(0, 0));
        assert_eq!(all[1], Offset::new(1, 0));
        assert_eq!(all[3], Offset::new(0, 1));
    }
}
