//! Pixel projection for hex grids.
//!
//! Converts between pixel positions and hex coordinates, parameterized by
//! [`Orientation`] and hex radius. The forward and inverse transforms are
//! exact matrix inverses of each other, so
//! `pixel_to_axial(axial_to_pixel(a)).round() == a` for every integer
//! axial coordinate — the property the input layer relies on when mapping
//! a tap back to a tile.
//!
//! Grid-level helpers ([`tile_center`], [`offset_at_point`]) compose the
//! projection with the parity conversion from a [`GridSpec`], so hosts
//! never juggle orientation or parity by hand.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

use glam::DVec2;
use hexcomb_core::{Axial, FracAxial, GridSpec, Offset, Orientation};

/// √3, the width-to-radius factor of a regular hexagon.
pub const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Project an axial coordinate to the pixel center of its tile.
///
/// Pointy-top: `x = R·√3·(q + r/2)`, `y = R·3/2·r`.
/// Flat-top: `x = R·3/2·q`, `y = R·√3·(r + q/2)`.
pub fn axial_to_pixel(a: Axial, radius: f64, orientation: Orientation) -> DVec2 {
    frac_to_pixel(FracAxial::from(a), radius, orientation)
}

/// [`axial_to_pixel`] for fractional coordinates.
pub fn frac_to_pixel(a: FracAxial, radius: f64, orientation: Orientation) -> DVec2 {
    match orientation {
        Orientation::PointyTop => DVec2::new(
            radius * SQRT_3 * (a.q + a.r * 0.5),
            radius * 1.5 * a.r,
        ),
        Orientation::FlatTop => DVec2::new(
            radius * 1.5 * a.q,
            radius * SQRT_3 * (a.r + a.q * 0.5),
        ),
    }
}

/// Invert the pixel projection, producing a fractional axial coordinate.
///
/// Applies the exact matrix inverse of whichever forward formula is
/// active; snap the result with [`FracAxial::round`] to obtain a cell.
pub fn pixel_to_axial(p: DVec2, radius: f64, orientation: Orientation) -> FracAxial {
    match orientation {
        Orientation::PointyTop => FracAxial::new(
            (SQRT_3 / 3.0 * p.x - p.y / 3.0) / radius,
            (2.0 / 3.0 * p.y) / radius,
        ),
        Orientation::FlatTop => FracAxial::new(
            (2.0 / 3.0 * p.x) / radius,
            (-p.x / 3.0 + SQRT_3 / 3.0 * p.y) / radius,
        ),
    }
}

/// Pixel center of the tile at `at`, composing the grid's parity
/// conversion with its pixel projection.
pub fn tile_center(spec: &GridSpec, at: Offset) -> DVec2 {
    axial_to_pixel(
        at.to_axial(spec.parity()),
        spec.hex_radius(),
        spec.orientation(),
    )
}

/// Hit test: the in-bounds tile containing the pixel position `p`, or
/// `None` when the position falls outside the grid.
pub fn offset_at_point(spec: &GridSpec, p: DVec2) -> Option<Offset> {
    let cell = pixel_to_axial(p, spec.hex_radius(), spec.orientation()).round();
    let offset = cell.to_offset(spec.parity());
    spec.in_bounds(offset).then_some(offset)
}

/// The six corner points of a hex tile, counterclockwise.
///
/// Pointy-top corners sit at `-30° + 60°·i`, flat-top corners at `60°·i`,
/// so the side length equals the radius. Hosts use these to stroke tile
/// outlines and build highlight overlays.
pub fn hex_corners(center: DVec2, radius: f64, orientation: Orientation) -> [DVec2; 6] {
    let offset_deg = match orientation {
        Orientation::PointyTop => -30.0,
        Orientation::FlatTop => 0.0,
    };
    std::array::from_fn(|i| {
        let angle = (offset_deg + 60.0 * i as f64).to_radians();
        center + radius * DVec2::new(angle.cos(), angle.sin())
    })
}
