//! Grid orientation and offset parity schemes.

use crate::axial::Axial;
use crate::offset::Offset;

/// Hex orientation: determines the pixel projection formulas and which
/// screen axis is compressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Vertices at top and bottom; rows form staggered horizontal lanes.
    PointyTop,
    /// Flat edges at top and bottom; columns form staggered vertical lanes.
    FlatTop,
}

/// Which lanes of an offset layout are geometrically shifted.
///
/// A grid fixes exactly one variant for its lifetime. Both the
/// axial↔offset conversion and the parity lookup tables read the variant
/// from the same [`GridSpec`](crate::GridSpec), so the classic bug — axial
/// math under one parity, tile indexing under another, every other lane
/// off by one — cannot arise from mixed configuration.
///
/// The `*Q` variants are column-shifted ("vertical") layouts keyed by
/// column parity; the `*R` variants are row-shifted ("horizontal") layouts
/// keyed by row parity.
///
/// # Examples
///
/// ```
/// use hexcomb_core::{Axial, Offset, Parity};
///
/// let a = Axial::new(3, -1);
/// let o = a.to_offset(Parity::EvenQ);
/// assert_eq!(o.to_axial(Parity::EvenQ), a); // exact round trip
/// assert_ne!(o.to_axial(Parity::OddQ), a);  // wrong parity shifts a lane
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Parity {
    /// Column-parity layout; odd columns sit half a row further down.
    EvenQ,
    /// Column-parity layout; odd columns sit half a row further up.
    OddQ,
    /// Row-parity layout; odd rows sit half a column to the left.
    EvenR,
    /// Row-parity layout; odd rows sit half a column to the right.
    OddR,
}

impl Parity {
    /// Convert an axial coordinate to offset storage indices.
    ///
    /// The `& 1` terms keep the half-lane correction exact for negative
    /// coordinates as well (two's-complement `& 1` is 1 for odd negatives,
    /// and the corrected numerator is always even).
    pub fn axial_to_offset(self, a: Axial) -> Offset {
        match self {
            Parity::EvenQ => Offset::new(a.q, a.r + (a.q - (a.q & 1)) / 2),
            Parity::OddQ => Offset::new(a.q, a.r + (a.q + (a.q & 1)) / 2),
            Parity::EvenR => Offset::new(a.q + (a.r + (a.r & 1)) / 2, a.r),
            Parity::OddR => Offset::new(a.q + (a.r - (a.r & 1)) / 2, a.r),
        }
    }

    /// Convert offset storage indices back to axial; exact inverse of
    /// [`axial_to_offset`](Self::axial_to_offset) for the same variant.
    pub fn offset_to_axial(self, o: Offset) -> Axial {
        match self {
            Parity::EvenQ => Axial::new(o.col, o.row - (o.col - (o.col & 1)) / 2),
            Parity::OddQ => Axial::new(o.col, o.row - (o.col + (o.col & 1)) / 2),
            Parity::EvenR => Axial::new(o.col - (o.row + (o.row & 1)) / 2, o.row),
            Parity::OddR => Axial::new(o.col - (o.row - (o.row & 1)) / 2, o.row),
        }
    }

    /// Stagger class of a tile: 0 for an even lane, 1 for an odd lane,
    /// where "lane" is a column for `*Q` variants and a row for `*R`
    /// variants. Neighbor deltas in offset space depend only on this class.
    pub fn stagger_class(self, at: Offset) -> usize {
        match self {
            Parity::EvenQ | Parity::OddQ => (at.col & 1) as usize,
            Parity::EvenR | Parity::OddR => (at.row & 1) as usize,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const ALL: [Parity; 4] = [Parity::EvenQ, Parity::OddQ, Parity::EvenR, Parity::OddR];

    #[test]
    fn even_q_worked_example() {
        // col = q, row = r + (q - (q & 1)) / 2
        assert_eq!(
            Parity::EvenQ.axial_to_offset(Axial::new(3, 1)),
            Offset::new(3, 2)
        );
        assert_eq!(
            Parity::OddQ.axial_to_offset(Axial::new(3, 1)),
            Offset::new(3, 3)
        );
    }

    #[test]
    fn wrong_parity_shifts_odd_lanes_only() {
        for q in -4i32..=4 {
            let a = Axial::new(q, 0);
            let even = Parity::EvenQ.axial_to_offset(a);
            let odd = Parity::OddQ.axial_to_offset(a);
            if q & 1 == 1 {
                assert_eq!(odd.row - even.row, 1, "odd column q={q} shifts by one");
            } else {
                assert_eq!(even, odd, "even column q={q} agrees across parities");
            }
        }
    }

    #[test]
    fn negative_coordinates_round_trip() {
        for parity in ALL {
            for q in -8i32..=8 {
                for r in -8i32..=8 {
                    let a = Axial::new(q, r);
                    assert_eq!(
                        parity.offset_to_axial(parity.axial_to_offset(a)),
                        a,
                        "axial round trip failed for {a} under {parity:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn stagger_class_follows_the_shifted_axis() {
        let o = Offset::new(3, 2);
        assert_eq!(Parity::EvenQ.stagger_class(o), 1);
        assert_eq!(Parity::OddQ.stagger_class(o), 1);
        assert_eq!(Parity::EvenR.stagger_class(o), 0);
        assert_eq!(Parity::OddR.stagger_class(o), 0);
    }

    proptest! {
        #[test]
        fn offset_round_trip_is_identity(
            col in -1000i32..1000,
            row in -1000i32..1000,
            idx in 0usize..4,
        ) {
            let parity = ALL[idx];
            let o = Offset::new(col, row);
            prop_assert_eq!(parity.axial_to_offset(parity.offset_to_axial(o)), o);
        }

        #[test]
        fn conversion_is_a_bijection_on_neighbors(
            q in -100i32..100,
            r in -100i32..100,
            idx in 0usize..4,
        ) {
            // Distinct axials map to distinct offsets.
            let parity = ALL[idx];
            let a = Axial::new(q, r);
            let o = parity.axial_to_offset(a);
            for n in a.neighbors() {
                prop_assert_ne!(parity.axial_to_offset(n), o);
            }
        }
    }
}
