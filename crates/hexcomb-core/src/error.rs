//! Error types for grid configuration.

use std::fmt;

/// Errors arising from [`GridSpec`](crate::GridSpec) construction.
///
/// These are configuration errors and are fatal to grid creation; nothing
/// is silently defaulted. Query-time absence (no path, out-of-bounds hit
/// test) is never an error — those surface as `Option`/outcome values.
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// The hex radius is zero, negative, or not finite.
    InvalidRadius {
        /// The rejected value.
        value: f64,
    },
    /// The grid has zero columns or zero rows.
    EmptyGrid,
    /// A dimension exceeds what `i32` coordinates can index.
    DimensionTooLarge {
        /// Which dimension ("columns" or "rows").
        name: &'static str,
        /// The rejected value.
        value: u32,
        /// The maximum allowed value.
        max: u32,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRadius { value } => {
                write!(f, "hex radius must be finite and positive, got {value}")
            }
            Self::EmptyGrid => write!(f, "grid must have at least one column and one row"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds maximum {max}")
            }
        }
    }
}

impl std::error::Error for GridError {}
