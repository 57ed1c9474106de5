use super::contour_model::*;
use super::quadrant_moments::*;
use crate::clipping::*;

use flo_curves::geo::{Coord2, Coordinate2D};
use flo_curves::bezier::{de_casteljau3, de_casteljau4};
use itertools::*;
use smallvec::*;

use std::iter;

///
/// A section of a contour: a straight line, or a quadratic or cubic bezier curve
///
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Section {
    /// A straight line from the first point to the second
    Line(Coord2, Coord2),

    /// A quadratic bezier curve (start point, control point, end point)
    Quadratic(Coord2, Coord2, Coord2),

    /// A cubic bezier curve (start point, two control points, end point)
    Cubic(Coord2, Coord2, Coord2, Coord2),
}

impl Section {
    ///
    /// The point where this section begins
    ///
    #[inline]
    pub fn start_point(&self) -> Coord2 {
        match self {
            Section::Line(start, _)             => *start,
            Section::Quadratic(start, _, _)     => *start,
            Section::Cubic(start, _, _, _)      => *start,
        }
    }

    ///
    /// The point where this section ends
    ///
    #[inline]
    pub fn end_point(&self) -> Coord2 {
        match self {
            Section::Line(_, end)               => *end,
            Section::Quadratic(_, _, end)       => *end,
            Section::Cubic(_, _, _, end)        => *end,
        }
    }

    ///
    /// Finds the point at a particular t value along this section
    ///
    pub fn point_at(&self, t: f64) -> Coord2 {
        match self {
            Section::Line(start, end)           => Coord2(start.x() + (end.x()-start.x())*t, start.y() + (end.y()-start.y())*t),
            Section::Quadratic(w1, w2, w3)      => de_casteljau3(t, *w1, *w2, *w3),
            Section::Cubic(w1, w2, w3, w4)      => de_casteljau4(t, *w1, *w2, *w3, *w4),
        }
    }

    ///
    /// The x and y polynomials for this section
    ///
    pub fn polynomials(&self) -> (CubicPolynomial, CubicPolynomial) {
        match self {
            Section::Line(w1, w2) => (
                CubicPolynomial::from_line(w1.x(), w2.x()), 
                CubicPolynomial::from_line(w1.y(), w2.y())
            ),

            Section::Quadratic(w1, w2, w3) => (
                CubicPolynomial::from_quadratic_bezier(w1.x(), w2.x(), w3.x()),
                CubicPolynomial::from_quadratic_bezier(w1.y(), w2.y(), w3.y())
            ),

            Section::Cubic(w1, w2, w3, w4) => (
                CubicPolynomial::from_bezier(w1.x(), w2.x(), w3.x(), w4.x()),
                CubicPolynomial::from_bezier(w1.y(), w2.y(), w3.y(), w4.y())
            ),
        }
    }

    ///
    /// The bounding box of the control points of this section (which the section itself always lies within)
    ///
    pub fn bounding_box(&self) -> (Coord2, Coord2) {
        let points  = self.control_points();
        let first   = points[0];

        points.iter()
            .skip(1)
            .fold((first, first), |(min, max), point| {
                (Coord2(min.x().min(point.x()), min.y().min(point.y())), Coord2(max.x().max(point.x()), max.y().max(point.y())))
            })
    }

    ///
    /// Returns the same section, travelling in the opposite direction
    ///
    pub fn reversed(&self) -> Section {
        match self {
            Section::Line(w1, w2)               => Section::Line(*w2, *w1),
            Section::Quadratic(w1, w2, w3)      => Section::Quadratic(*w3, *w2, *w1),
            Section::Cubic(w1, w2, w3, w4)      => Section::Cubic(*w4, *w3, *w2, *w1),
        }
    }

    ///
    /// The contribution this section makes to the signed area of a contour (`1/2 * integral of (x dy - y dx)`)
    ///
    /// For a line, this is the usual shoelace term.
    ///
    pub fn signed_area(&self) -> f64 {
        match self {
            Section::Line(w1, w2) => (w1.x()*w2.y() - w2.x()*w1.y()) * 0.5,

            _ => {
                let (x, y) = self.polynomials();
                (x.integrate_with_derivative(&y, 0.0, 1.0) - y.integrate_with_derivative(&x, 0.0, 1.0)) * 0.5
            }
        }
    }

    ///
    /// Computes the boundary integrals for the part of this section inside the half-open unit square
    ///
    /// The section should already be in the coordinate space of the quadrant being considered.
    ///
    pub fn quadrant_moments(&self) -> QuadrantMoments {
        let (min, max) = self.bounding_box();

        // The section stays within its control points, so can be skipped if they're all on one side of the square
        if max.x() < 0.0 || max.y() < 0.0 || min.x() >= 1.0 || min.y() >= 1.0 {
            return QuadrantMoments::zero();
        }

        let (x, y) = self.polynomials();

        // Sections entirely inside the square need no clipping
        if min.x() >= 0.0 && min.y() >= 0.0 && max.x() < 1.0 && max.y() < 1.0 {
            return piece_moments(&x, &y, 0.0, 1.0);
        }

        // Divide the section at the points where it crosses the edges of the square: each piece is either entirely inside or entirely outside
        let crossings = polynomial_rectangle_intersections(&ClipRectangle::unit(), &x, &y);

        iter::once(0.0).chain(crossings.into_iter()).chain(iter::once(1.0))
            .tuple_windows()
            .filter(|(t0, t1)| t1 > t0)
            .filter(|(t0, t1)| {
                let mid_t = (t0 + t1) * 0.5;
                inside_unit_square(x.value_at(mid_t), y.value_at(mid_t))
            })
            .fold(QuadrantMoments::zero(), |moments, (t0, t1)| moments + piece_moments(&x, &y, t0, t1))
    }
}

///
/// True if a point is in the half-open square `[0, 1) x [0, 1)`
///
/// Pieces of contour lying along the far edges of a quadrant belong to the neighbouring quadrant, so each piece is 
/// counted exactly once when a cell is assembled.
///
#[inline]
fn inside_unit_square(x: f64, y: f64) -> bool {
    x >= 0.0 && x < 1.0 && y >= 0.0 && y < 1.0
}

///
/// The moments for the part of a curve between two t values
///
#[inline]
fn piece_moments(x: &CubicPolynomial, y: &CubicPolynomial, t0: f64, t1: f64) -> QuadrantMoments {
    let jump = Coord2(y.value_at(t1) - y.value_at(t0), x.value_at(t0) - x.value_at(t1));
    let area = Coord2(x.integrate_with_derivative(y, t0, t1), -y.integrate_with_derivative(x, t0, t1));

    QuadrantMoments {
        jump: Coord2(jump.x() * 0.25, jump.y() * 0.25),
        area: Coord2(area.x() * 0.25, area.y() * 0.25),
    }
}

impl ContourSection for Section {
    fn control_points(&self) -> SmallVec<[Coord2; 4]> {
        match self {
            Section::Line(w1, w2)               => smallvec![*w1, *w2],
            Section::Quadratic(w1, w2, w3)      => smallvec![*w1, *w2, *w3],
            Section::Cubic(w1, w2, w3, w4)      => smallvec![*w1, *w2, *w3, *w4],
        }
    }

    fn map_points<TFn>(&self, transform: TFn) -> Self
    where
        TFn: Fn(Coord2) -> Coord2,
    {
        match self {
            Section::Line(w1, w2)               => Section::Line(transform(*w1), transform(*w2)),
            Section::Quadratic(w1, w2, w3)      => Section::Quadratic(transform(*w1), transform(*w2), transform(*w3)),
            Section::Cubic(w1, w2, w3, w4)      => Section::Cubic(transform(*w1), transform(*w2), transform(*w3), transform(*w4)),
        }
    }
}
