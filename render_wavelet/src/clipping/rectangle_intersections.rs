use super::cubic_polynomial::*;

use flo_curves::geo::{Coord2, Coordinate2D};
use smallvec::*;

///
/// Crossing points can lie this far outside the rectangle and still be counted
///
pub const INTERSECTION_TOLERANCE: f64 = 1e-5;

///
/// An axis-aligned rectangle to clip curves against
///
/// This uses the y-down convention, so `top` is expected to be less than or equal to `bottom`.
///
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ClipRectangle {
    pub left:   f64,
    pub right:  f64,
    pub bottom: f64,
    pub top:    f64,
}

impl ClipRectangle {
    ///
    /// Creates a new clipping rectangle
    ///
    #[inline]
    pub fn new(left: f64, right: f64, bottom: f64, top: f64) -> Self {
        debug_assert!(left <= right, "Clip rectangle has left ({}) > right ({})", left, right);
        debug_assert!(top <= bottom, "Clip rectangle has top ({}) > bottom ({})", top, bottom);

        ClipRectangle { left, right, bottom, top }
    }

    ///
    /// The rectangle covering the unit square (0, 0) - (1, 1)
    ///
    #[inline]
    pub fn unit() -> Self {
        ClipRectangle { left: 0.0, right: 1.0, bottom: 1.0, top: 0.0 }
    }

    ///
    /// True if a point is inside this rectangle once it has been grown by `tolerance` on every side
    ///
    #[inline]
    pub fn contains_with_tolerance(&self, point: &Coord2, tolerance: f64) -> bool {
        self.left - tolerance <= point.x() && point.x() <= self.right + tolerance 
            && self.top - tolerance <= point.y() && point.y() <= self.bottom + tolerance
    }
}

///
/// Finds the t values where the cubic bezier curve with the control points w1, w2, w3, w4 crosses the edges of a rectangle
///
/// The result is sorted in ascending order. Only crossings in the range 0..=1 that land on the rectangle itself (within
/// `INTERSECTION_TOLERANCE`) are returned. Crossings where the curve touches a corner or is tangent to an edge may be 
/// reported more than once. An empty result means that the curve never crosses the edge of the rectangle.
///
pub fn cubic_rectangle_intersections(rectangle: &ClipRectangle, w1: Coord2, w2: Coord2, w3: Coord2, w4: Coord2) -> SmallVec<[f64; 12]> {
    let x = CubicPolynomial::from_bezier(w1.x(), w2.x(), w3.x(), w4.x());
    let y = CubicPolynomial::from_bezier(w1.y(), w2.y(), w3.y(), w4.y());

    polynomial_rectangle_intersections(rectangle, &x, &y)
}

///
/// As for `cubic_rectangle_intersections()`, except the curve is described by its x and y polynomials
///
pub fn polynomial_rectangle_intersections(rectangle: &ClipRectangle, x: &CubicPolynomial, y: &CubicPolynomial) -> SmallVec<[f64; 12]> {
    let mut crossings = SmallVec::<[f64; 12]>::new();

    crossings.extend(x.roots(rectangle.left));
    crossings.extend(x.roots(rectangle.right));
    crossings.extend(y.roots(rectangle.bottom));
    crossings.extend(y.roots(rectangle.top));

    crossings.retain(|t| {
        let t = *t;
        (0.0..=1.0).contains(&t) && rectangle.contains_with_tolerance(&Coord2(x.value_at(t), y.value_at(t)), INTERSECTION_TOLERANCE)
    });
    crossings.sort_by(|a, b| a.total_cmp(b));

    crossings
}
