use super::coverage_matrix::*;
use crate::wavelet::*;

use flo_curves::geo::{Coord2};

///
/// Samples the coverage function at the centre of every pixel in a frame
///
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LatticeSampler {
    /// The size of the square domain in pixels: pixel coordinates are divided by this to map them into the unit domain
    domain_size: f64,
}

impl LatticeSampler {
    ///
    /// Creates a lattice sampler for a domain of the specified size
    ///
    #[inline]
    pub fn new(domain_size: f64) -> LatticeSampler {
        LatticeSampler { domain_size }
    }

    ///
    /// The point in the unit domain where the pixel at (x, y) is sampled
    ///
    #[inline]
    pub fn lattice_point(&self, x: usize, y: usize) -> Coord2 {
        Coord2((x as f64 + 0.5) / self.domain_size, (y as f64 + 0.5) / self.domain_size)
    }

    ///
    /// Evaluates the coverage for a single row of pixels
    ///
    #[inline]
    fn sample_row(&self, evaluator: &CoverageEvaluator, y: usize, row: &mut [f64]) {
        for (x, value) in row.iter_mut().enumerate() {
            *value = evaluator.evaluate(self.lattice_point(x, y));
        }
    }

    ///
    /// Generates the coverage matrix for a `width` x `height` frame
    ///
    #[cfg(not(feature="multithreading"))]
    pub fn sample(&self, evaluator: &CoverageEvaluator, width: usize, height: usize) -> CoverageMatrix {
        let mut values = vec![0.0; width * height];

        if width > 0 {
            values.chunks_mut(width)
                .enumerate()
                .for_each(|(y, row)| self.sample_row(evaluator, y, row));
        }

        CoverageMatrix::from_values(width, height, values)
    }

    ///
    /// Generates the coverage matrix for a `width` x `height` frame
    ///
    #[cfg(feature="multithreading")]
    pub fn sample(&self, evaluator: &CoverageEvaluator, width: usize, height: usize) -> CoverageMatrix {
        use rayon::prelude::*;

        let mut values = vec![0.0; width * height];

        if width > 0 {
            values.par_chunks_mut(width)
                .enumerate()
                .for_each(|(y, row)| self.sample_row(evaluator, y, row));
        }

        CoverageMatrix::from_values(width, height, values)
    }
}
