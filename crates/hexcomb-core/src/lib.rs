//! Core types for hexagonal grid geometry.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! coordinate value types ([`Axial`], [`Offset`], [`FracAxial`]), the layout
//! enums ([`Orientation`], [`Parity`]), the validated grid configuration
//! ([`GridSpec`]), and the parity-aware conversions between axial and offset
//! coordinates.
//!
//! # Coordinate systems
//!
//! - **Axial** `(q, r)`: two of the three cube components, `s = -q - r`
//!   implied. All adjacency and distance math happens here.
//! - **Offset** `(col, row)`: the storage indices a host's tile array uses.
//!   Which columns or rows are geometrically shifted is the grid's
//!   [`Parity`]; applying the wrong parity silently displaces alternate
//!   lanes by one cell, so both directions of the conversion read the
//!   parity from the same [`GridSpec`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod axial;
pub mod error;
pub mod frac;
pub mod layout;
pub mod offset;
pub mod spec;

pub use axial::{Axial, AXIAL_DIRECTIONS};
pub use error::GridError;
pub use frac::FracAxial;
pub use layout::{Orientation, Parity};
pub use offset::Offset;
pub use spec::GridSpec;
