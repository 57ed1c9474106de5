use super::dyadic_cell::*;
use super::haar_basis::*;
use super::coefficient_table::*;

use flo_curves::geo::{Coord2, Coordinate2D};

///
/// Reconstructs the coverage of a contour at points in the unit domain from its wavelet coefficients
///
/// The coverage is the area of the contour plus the coefficient for every wavelet that is positive at the point, minus the
/// coefficient for every wavelet that is negative. With a table of `n` levels, this is the fraction of the cell of size
/// `2^-n` containing the point that is inside the contour.
///
#[derive(Copy, Clone, Debug)]
pub struct CoverageEvaluator<'a> {
    /// The signed area of the contour (the coefficient of the scaling function)
    area: f64,

    /// The wavelet coefficients for the contour
    table: &'a WaveletCoefficientTable,
}

impl<'a> CoverageEvaluator<'a> {
    ///
    /// Creates an evaluator for a contour with the specified area and coefficients
    ///
    #[inline]
    pub fn new(area: f64, table: &'a WaveletCoefficientTable) -> CoverageEvaluator<'a> {
        CoverageEvaluator { area, table }
    }

    ///
    /// Computes the coverage at a point
    ///
    /// Only one cell at each level can have a wavelet that is non-zero at a given point, so this finds that cell directly 
    /// and applies its coefficients with the sign of each wavelet in the quadrant the point is in.
    ///
    pub fn evaluate(&self, point: Coord2) -> f64 {
        let mut coverage = self.area;

        for level in 0..self.table.num_levels() {
            let (cell, (fx, fy)) = match DyadicCell::containing(level, point.x(), point.y()) {
                Some(cell)  => cell,
                None        => { continue; }
            };

            let coefficients    = self.table.coefficients_for(cell);
            let negative_x      = fx >= 0.5;
            let negative_y      = fy >= 0.5;

            coverage += if negative_y { -coefficients.horizontal } else { coefficients.horizontal };
            coverage += if negative_x { -coefficients.vertical } else { coefficients.vertical };
            coverage += if negative_x != negative_y { -coefficients.diagonal } else { coefficients.diagonal };
        }

        coverage
    }

    ///
    /// Computes the coverage at a point by evaluating every wavelet in the table
    ///
    /// This produces the same result as `evaluate()` but takes time proportional to the number of cells rather than the 
    /// number of levels.
    ///
    pub fn evaluate_exhaustive(&self, point: Coord2) -> f64 {
        let mut coverage = self.area;

        for (cell, coefficients) in self.table.iter() {
            for orientation in WaveletOrientation::ALL.iter() {
                let basis = haar_basis(point, *orientation, cell);

                if basis > 0.0 {
                    coverage += coefficients.get(*orientation);
                } else if basis < 0.0 {
                    coverage -= coefficients.get(*orientation);
                }
            }
        }

        coverage
    }
}
