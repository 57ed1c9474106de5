use super::contour_model::*;
use super::quadrant_moments::*;
use super::section::*;
use crate::error::*;

use flo_curves::geo::{Coord2};
use itertools::*;

///
/// A closed contour made up of line and bezier sections
///
/// The end point of each section is expected to be the start point of the next, and the end of the last section should
/// join up with the start of the first.
///
#[derive(Clone, Debug, PartialEq)]
pub struct Contour {
    sections: Vec<Section>,
}

impl Contour {
    ///
    /// Creates a contour from a list of sections
    ///
    pub fn from_sections(sections: impl IntoIterator<Item=Section>) -> Contour {
        Contour {
            sections: sections.into_iter().collect()
        }
    }

    ///
    /// Creates a closed polygon from a list of points
    ///
    /// The last point is joined back up to the first (if the list already repeats the first point at the end, the 
    /// duplicate is ignored)
    ///
    pub fn from_lines(points: impl IntoIterator<Item=Coord2>) -> Result<Contour, ContourError> {
        let mut points = points.into_iter().collect::<Vec<_>>();
        if points.len() > 1 && points.first() == points.last() {
            points.pop();
        }

        if points.len() < 2 {
            return Err(ContourError::TooFewPoints { kind: "line", minimum: 2, count: points.len() });
        }

        let sections = points.into_iter()
            .circular_tuple_windows::<(_, _)>()
            .map(|(start, end)| Section::Line(start, end))
            .collect();

        Ok(Contour { sections })
    }

    ///
    /// Creates a closed contour of quadratic bezier curves
    ///
    /// The points alternate between points on the curve and control points: `start, control, start, control, ...`, and 
    /// the final control point curves back to the first point.
    ///
    pub fn from_quadratic_points(points: impl IntoIterator<Item=Coord2>) -> Result<Contour, ContourError> {
        let points = points.into_iter().collect::<Vec<_>>();

        if points.len() < 2 {
            return Err(ContourError::TooFewPoints { kind: "quadratic", minimum: 2, count: points.len() });
        } else if points.len() % 2 != 0 {
            return Err(ContourError::IncompleteSection { kind: "quadratic", per_section: 2, count: points.len() });
        }

        let num_points  = points.len();
        let sections    = (0..num_points).step_by(2)
            .map(|idx| Section::Quadratic(points[idx], points[idx+1], points[(idx+2) % num_points]))
            .collect();

        Ok(Contour { sections })
    }

    ///
    /// Creates a closed contour of cubic bezier curves
    ///
    /// The points are grouped in threes: `start, control1, control2, start, control1, control2, ...`, and the final pair of
    /// control points curve back to the first point.
    ///
    pub fn from_cubic_points(points: impl IntoIterator<Item=Coord2>) -> Result<Contour, ContourError> {
        let points = points.into_iter().collect::<Vec<_>>();

        if points.len() < 3 {
            return Err(ContourError::TooFewPoints { kind: "cubic", minimum: 3, count: points.len() });
        } else if points.len() % 3 != 0 {
            return Err(ContourError::IncompleteSection { kind: "cubic", per_section: 3, count: points.len() });
        }

        let num_points  = points.len();
        let sections    = (0..num_points).step_by(3)
            .map(|idx| Section::Cubic(points[idx], points[idx+1], points[idx+2], points[(idx+3) % num_points]))
            .collect();

        Ok(Contour { sections })
    }

    ///
    /// Returns the same contour wound in the opposite direction (which negates its area)
    ///
    pub fn reversed(&self) -> Contour {
        Contour {
            sections: self.sections.iter().rev().map(|section| section.reversed()).collect()
        }
    }

    ///
    /// The number of sections in this contour
    ///
    #[inline]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl ContourModel for Contour {
    type Section = Section;

    fn apply_transform<TFn>(&mut self, transform: TFn)
    where
        TFn: Fn(Coord2) -> Coord2,
    {
        self.sections.iter_mut()
            .for_each(|section| *section = section.map_points(&transform));
    }

    fn total_area(&self) -> f64 {
        self.sections.iter()
            .map(|section| section.signed_area())
            .sum()
    }

    #[inline]
    fn sections(&self) -> &[Section] {
        &self.sections
    }

    #[inline]
    fn quadrant_moments(&self, section: &Section) -> QuadrantMoments {
        section.quadrant_moments()
    }
}
