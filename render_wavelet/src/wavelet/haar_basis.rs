use super::dyadic_cell::*;

use flo_curves::geo::{Coord2, Coordinate2D};

///
/// The three orientations of the 2D Haar wavelet
///
/// Each is a product of 1D functions along the x and y axes: either a box (1 across the cell) or a step (1 across the first
/// half of the cell and -1 across the second half).
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum WaveletOrientation {
    /// Box along x, step along y: picks up changes in coverage from top to bottom
    Horizontal,

    /// Step along x, box along y: picks up changes in coverage from left to right
    Vertical,

    /// Step along both axes
    Diagonal,
}

impl WaveletOrientation {
    /// All of the orientations, in the order they're applied when reconstructing coverage
    pub const ALL: [WaveletOrientation; 3] = [WaveletOrientation::Horizontal, WaveletOrientation::Vertical, WaveletOrientation::Diagonal];

    ///
    /// True if the wavelet for this orientation changes sign along the x axis
    ///
    #[inline]
    pub fn steps_in_x(&self) -> bool {
        match self {
            WaveletOrientation::Horizontal  => false,
            WaveletOrientation::Vertical    => true,
            WaveletOrientation::Diagonal    => true,
        }
    }

    ///
    /// True if the wavelet for this orientation changes sign along the y axis
    ///
    #[inline]
    pub fn steps_in_y(&self) -> bool {
        match self {
            WaveletOrientation::Horizontal  => true,
            WaveletOrientation::Vertical    => false,
            WaveletOrientation::Diagonal    => true,
        }
    }
}

///
/// The 1D Haar function at `pos`: either the box function (when `step` is false) or the Haar step
///
/// Both are 0 outside of `[0, 1)`. The step is 1 on `[0, 0.5)` and -1 on `[0.5, 1)`.
///
#[inline]
pub fn haar_1d(pos: f64, step: bool) -> f64 {
    if pos < 0.0 || pos >= 1.0 {
        0.0
    } else if !step || pos < 0.5 {
        1.0
    } else {
        -1.0
    }
}

///
/// The value of the 2D Haar wavelet for a cell and orientation at a point in the unit domain
///
/// This includes the `2^level` normalisation factor, so the wavelets at each level have unit energy.
///
pub fn haar_basis(point: Coord2, orientation: WaveletOrientation, cell: DyadicCell) -> f64 {
    let scale = DyadicCell::scale(cell.level);

    scale 
        * haar_1d(scale*point.x() - cell.kx as f64, orientation.steps_in_x())
        * haar_1d(scale*point.y() - cell.ky as f64, orientation.steps_in_y())
}
