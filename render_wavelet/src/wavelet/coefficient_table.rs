use super::dyadic_cell::*;
use super::haar_basis::*;
use crate::contour::*;

use flo_curves::geo::{Coord2, Coordinate2D};

///
/// The Haar wavelet coefficients for a single dyadic cell
///
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct WaveletCoefficients {
    pub horizontal: f64,
    pub vertical:   f64,
    pub diagonal:   f64,
}

impl WaveletCoefficients {
    ///
    /// Retrieves the coefficient for a particular orientation
    ///
    #[inline]
    pub fn get(&self, orientation: WaveletOrientation) -> f64 {
        match orientation {
            WaveletOrientation::Horizontal  => self.horizontal,
            WaveletOrientation::Vertical    => self.vertical,
            WaveletOrientation::Diagonal    => self.diagonal,
        }
    }
}

///
/// The Haar wavelet decomposition of the inside of a contour, for every dyadic cell up to a maximum level
///
/// The contour must be in the unit domain (ie, scaled so the area to be rendered is `(0, 0) - (1, 1)`). The coefficients
/// are stored level by level in a single list, using `DyadicCell::index()` to find the coefficients for a cell.
///
#[derive(Clone, Debug)]
pub struct WaveletCoefficientTable {
    /// The number of levels in this table (the maximum level is one less than this)
    num_levels: usize,

    /// The coefficients for each cell
    coefficients: Vec<WaveletCoefficients>,
}

impl WaveletCoefficientTable {
    ///
    /// Computes the coefficient table for a contour in the unit domain, for the levels `0..num_levels`
    ///
    pub fn new<TContour: ContourModel>(contour: &TContour, num_levels: usize) -> WaveletCoefficientTable {
        let mut coefficients = Vec::with_capacity(DyadicCell::total_cells(num_levels));

        for level in 0..num_levels {
            log::trace!("Computing {} wavelet coefficients for level {}", DyadicCell::cells_per_axis(level) * DyadicCell::cells_per_axis(level), level);
            Self::compute_level(contour, level, &mut coefficients);
        }

        log::debug!("Built wavelet coefficient table: {} levels, {} cells, {} contour sections", num_levels, coefficients.len(), contour.sections().len());

        WaveletCoefficientTable { num_levels, coefficients }
    }

    ///
    /// Appends the coefficients for every cell in a level to a list
    ///
    #[cfg(not(feature="multithreading"))]
    fn compute_level<TContour: ContourModel>(contour: &TContour, level: usize, coefficients: &mut Vec<WaveletCoefficients>) {
        coefficients.extend(DyadicCell::cells_in_level(level)
            .map(|cell| Self::compute(contour, cell)));
    }

    ///
    /// Appends the coefficients for every cell in a level to a list
    ///
    #[cfg(feature="multithreading")]
    fn compute_level<TContour: ContourModel>(contour: &TContour, level: usize, coefficients: &mut Vec<WaveletCoefficients>) {
        use rayon::prelude::*;

        let cells = DyadicCell::cells_in_level(level).collect::<Vec<_>>();

        coefficients.par_extend(cells.into_par_iter()
            .map(|cell| Self::compute(contour, cell)));
    }

    ///
    /// Computes the wavelet coefficients for a single cell of a contour
    ///
    /// Each section of the contour is mapped into the coordinate space of each of the four quadrants of the cell, and the
    /// moments from each quadrant are combined according to the sign of each wavelet in that quadrant.
    ///
    pub fn compute<TContour: ContourModel>(contour: &TContour, cell: DyadicCell) -> WaveletCoefficients {
        let scale   = 2.0 * DyadicCell::scale(cell.level);
        let offset  = (2.0 * cell.kx as f64, 2.0 * cell.ky as f64);

        let mut result = WaveletCoefficients::default();

        for section in contour.sections() {
            let quadrant = |qx: f64, qy: f64| {
                let local = section.map_points(|point| Coord2(scale*point.x() - offset.0 - qx, scale*point.y() - offset.1 - qy));
                contour.quadrant_moments(&local)
            };

            // The jump for the first quadrant is never needed: it's the quadrant where every wavelet is positive
            let QuadrantMoments { jump: _,   area: l00 } = quadrant(0.0, 0.0);
            let QuadrantMoments { jump: k01, area: l01 } = quadrant(0.0, 1.0);
            let QuadrantMoments { jump: k10, area: l10 } = quadrant(1.0, 0.0);
            let QuadrantMoments { jump: k11, area: l11 } = quadrant(1.0, 1.0);

            result.vertical     += l00.x() + l01.x() + k10.x() - l10.x() + k11.x() - l11.x();
            result.horizontal   += l00.y() + l10.y() + k01.y() - l01.y() + k11.y() - l11.y();
            result.diagonal     += l00.x() - l01.x() + k10.x() - l10.x() - k11.x() + l11.x();
        }

        result
    }

    ///
    /// The number of levels in this table
    ///
    #[inline]
    pub fn num_levels(&self) -> usize {
        self.num_levels
    }

    ///
    /// The number of cells in this table
    ///
    #[inline]
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    ///
    /// Retrieves the coefficients for a cell, or None if the cell is beyond the last level in this table
    ///
    #[inline]
    pub fn get(&self, cell: DyadicCell) -> Option<WaveletCoefficients> {
        if cell.level < self.num_levels {
            self.coefficients.get(cell.index()).copied()
        } else {
            None
        }
    }

    ///
    /// Retrieves the coefficients for a cell that's known to be in this table
    ///
    #[inline]
    pub(crate) fn coefficients_for(&self, cell: DyadicCell) -> &WaveletCoefficients {
        &self.coefficients[cell.index()]
    }

    ///
    /// Iterates through the cells in this table along with their coefficients, in index order
    ///
    pub fn iter<'a>(&'a self) -> impl 'a + Iterator<Item=(DyadicCell, WaveletCoefficients)> {
        DyadicCell::all_cells(self.num_levels)
            .zip(self.coefficients.iter().copied())
    }
}
