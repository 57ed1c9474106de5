use super::quadrant_moments::*;

use flo_curves::geo::{Coord2};
use smallvec::*;

///
/// A single piece of the boundary of a contour
///
pub trait ContourSection : Clone + Send + Sync {
    ///
    /// The control points for this section, starting with the start point and ending with the end point
    ///
    fn control_points(&self) -> SmallVec<[Coord2; 4]>;

    ///
    /// Creates a copy of this section with a transformation applied to every control point
    ///
    fn map_points<TFn>(&self, transform: TFn) -> Self
    where
        TFn: Fn(Coord2) -> Coord2;
}

///
/// Describes a closed contour that can be decomposed into wavelet coefficients
///
/// The wavelet coefficient table only ever uses a contour through this interface: the contour provides its area and a
/// list of sections, and can calculate the boundary integrals (the 'quadrant moments') for a section that has been mapped
/// into the coordinate space of one quadrant of a dyadic cell.
///
pub trait ContourModel : Clone + Send + Sync {
    /// The type of a section of this contour
    type Section: ContourSection;

    ///
    /// Applies a transformation to every control point in this contour
    ///
    fn apply_transform<TFn>(&mut self, transform: TFn)
    where
        TFn: Fn(Coord2) -> Coord2;

    ///
    /// The signed area enclosed by this contour
    ///
    /// This is positive for contours that wind anticlockwise when the y axis points up (which is clockwise on a y-down display)
    ///
    fn total_area(&self) -> f64;

    ///
    /// The sections making up this contour, in order
    ///
    fn sections(&self) -> &[Self::Section];

    ///
    /// Computes the moments of a section that has been mapped into the coordinate space of a quadrant, where the quadrant
    /// covers the unit square
    ///
    fn quadrant_moments(&self, section: &Self::Section) -> QuadrantMoments;
}
