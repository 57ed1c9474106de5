use flo_curves::geo::{Coord2, Coordinate2D};

use std::ops::{Add};

///
/// The boundary integrals for the part of a contour that lies within one quadrant of a dyadic cell
///
/// These are evaluated in the coordinate space of the quadrant, where the quadrant covers the half-open unit square
/// `[0, 1) x [0, 1)`. For the part `C` of the contour inside that square:
///
/// * `jump` is `1/4 * integral over C of (dy, -dx)`
/// * `area` is `1/4 * integral over C of (x dy, -y dx)`
///
/// `area` is the divergence theorem applied to the part of the contour inside the quadrant, and `jump` is the
/// correction for moving the origin of that integral to the far edge of the quadrant. The edges of the quadrant
/// itself are left out: they cancel out when the four quadrants of a cell are combined into wavelet coefficients.
///
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct QuadrantMoments {
    /// The jump vector (K)
    pub jump: Coord2,

    /// The area vector (L)
    pub area: Coord2,
}

impl QuadrantMoments {
    ///
    /// The moments for a section that does not pass through the quadrant
    ///
    #[inline]
    pub fn zero() -> QuadrantMoments {
        QuadrantMoments {
            jump: Coord2(0.0, 0.0),
            area: Coord2(0.0, 0.0),
        }
    }
}

impl Add for QuadrantMoments {
    type Output = QuadrantMoments;

    #[inline]
    fn add(self, other: QuadrantMoments) -> QuadrantMoments {
        QuadrantMoments {
            jump: Coord2(self.jump.x() + other.jump.x(), self.jump.y() + other.jump.y()),
            area: Coord2(self.area.x() + other.area.x(), self.area.y() + other.area.y()),
        }
    }
}
