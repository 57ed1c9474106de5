use super::frame_size::*;
use super::coverage_matrix::*;
use super::lattice_sampler::*;
use crate::contour::*;
use crate::wavelet::*;
use crate::error::*;

use flo_curves::geo::{Coord2, Coordinate2D};

///
/// Rasterizes a contour to coverage values using its Haar wavelet decomposition
///
/// Creating the rasterizer takes a copy of the contour, scales it into the unit domain and calculates the wavelet
/// coefficients for every cell. After that, the coverage can be sampled as many times as needed.
///
#[derive(Clone, Debug)]
pub struct WaveletRasterizer<TContour: ContourModel = Contour> {
    /// The frame size that determines the domain
    frame_size: FrameSize,

    /// The contour, scaled into the unit domain
    contour: TContour,

    /// The signed area of the scaled contour
    area: f64,

    /// The wavelet coefficients for the contour
    table: WaveletCoefficientTable,

    /// Maps pixels into the unit domain
    sampler: LatticeSampler,
}

impl<TContour: ContourModel> WaveletRasterizer<TContour> {
    ///
    /// Creates a rasterizer for a contour that will be rendered into a frame of the specified size
    ///
    /// The contour's coordinates are in pixels. The frame size determines how many levels of coefficients are needed
    /// for the coverage of each pixel to be exact.
    ///
    pub fn new(contour: &TContour, width: usize, height: usize) -> Result<WaveletRasterizer<TContour>, RasterError> {
        let frame_size = FrameSize::new(width, height)?;

        Self::with_frame_size(contour, frame_size, frame_size.num_levels())
    }

    ///
    /// Creates a rasterizer with a specific number of coefficient levels
    ///
    /// The domain is still derived from the frame size: fewer levels than `FrameSize::num_levels()` produces a blurred
    /// result (each pixel takes the coverage of a larger cell), and more produces sub-pixel samples of the coverage.
    ///
    /// `num_levels` can be at most `MAX_COEFFICIENT_LEVELS`: larger values return `RasterError::TooManyLevels`.
    ///
    pub fn with_levels(contour: &TContour, width: usize, height: usize, num_levels: usize) -> Result<WaveletRasterizer<TContour>, RasterError> {
        let frame_size = FrameSize::new(width, height)?;

        Self::with_frame_size(contour, frame_size, num_levels)
    }

    fn with_frame_size(contour: &TContour, frame_size: FrameSize, num_levels: usize) -> Result<WaveletRasterizer<TContour>, RasterError> {
        if num_levels > MAX_COEFFICIENT_LEVELS {
            return Err(RasterError::TooManyLevels { num_levels, maximum: MAX_COEFFICIENT_LEVELS });
        }

        let domain_size = frame_size.domain_size() as f64;

        log::debug!("Rasterizing contour to {}x{} frame ({}x{} domain, {} levels)", frame_size.width, frame_size.height, domain_size, domain_size, num_levels);

        // Work on a copy of the contour scaled into the unit domain
        let mut contour = contour.clone();
        contour.apply_transform(|point| Coord2(point.x() / domain_size, point.y() / domain_size));

        let area    = contour.total_area();
        let table   = WaveletCoefficientTable::new(&contour, num_levels);
        let sampler = LatticeSampler::new(domain_size);

        Ok(WaveletRasterizer { frame_size, contour, area, table, sampler })
    }

    ///
    /// The size of the frame that this rasterizer renders
    ///
    #[inline]
    pub fn frame_size(&self) -> FrameSize {
        self.frame_size
    }

    ///
    /// The number of levels of wavelet coefficients used to calculate the coverage
    ///
    #[inline]
    pub fn num_levels(&self) -> usize {
        self.table.num_levels()
    }

    ///
    /// The signed area of the contour as a fraction of the domain
    ///
    #[inline]
    pub fn area(&self) -> f64 {
        self.area
    }

    ///
    /// The contour being rendered, scaled into the unit domain
    ///
    #[inline]
    pub fn contour(&self) -> &TContour {
        &self.contour
    }

    ///
    /// The wavelet coefficients for the contour
    ///
    #[inline]
    pub fn coefficients(&self) -> &WaveletCoefficientTable {
        &self.table
    }

    ///
    /// Returns an evaluator for the coverage at points in the unit domain
    ///
    #[inline]
    pub fn evaluator(&self) -> CoverageEvaluator<'_> {
        CoverageEvaluator::new(self.area, &self.table)
    }

    ///
    /// The coverage at a position in pixel coordinates
    ///
    pub fn coverage_at(&self, x: f64, y: f64) -> f64 {
        let domain_size = self.frame_size.domain_size() as f64;

        self.evaluator().evaluate(Coord2(x / domain_size, y / domain_size))
    }

    ///
    /// Samples the coverage at the centre of every pixel of a `width` x `height` frame
    ///
    pub fn coverage(&self, width: usize, height: usize) -> CoverageMatrix {
        self.sampler.sample(&self.evaluator(), width, height)
    }

    ///
    /// Samples the coverage for the frame size that this rasterizer was created with
    ///
    pub fn rasterize(&self) -> CoverageMatrix {
        self.coverage(self.frame_size.width, self.frame_size.height)
    }
}
