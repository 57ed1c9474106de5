//!
//! # flo_render_wavelet
//!
//! Renders closed contours made up of line and bezier sections to a matrix of coverage values, without
//! supersampling. The interior of the contour is decomposed into a table of Haar wavelet coefficients, which
//! are calculated exactly from integrals along the contour's boundary. Summing the coefficients that are
//! active at a point reconstructs the fraction of the pixel at that point that is covered by the contour.
//!
//! ```
//! use flo_render_wavelet::*;
//! use flo_render_wavelet::curves::geo::{Coord2};
//!
//! let triangle    = Contour::from_lines(vec![Coord2(8.0, 8.0), Coord2(60.0, 12.0), Coord2(20.0, 28.0)]).unwrap();
//! let rasterizer  = WaveletRasterizer::new(&triangle, 64, 64).unwrap();
//! let coverage    = rasterizer.coverage(64, 64);
//!
//! assert!((coverage.get(29, 16) - 1.0).abs() < 0.05);
//! assert!(coverage.get(2, 2).abs() < 0.05);
//! ```
//!

mod error;

/// Finds where bezier curves cross the edges of an axis-aligned rectangle
pub mod clipping;

/// Contours made up of line and bezier sections, and the boundary integrals used to derive wavelet coefficients from them
pub mod contour;

/// The Haar wavelet coefficient table and the evaluator that reconstructs coverage values from it
pub mod wavelet;

/// Sampling the coverage function at pixel centres to produce a coverage matrix
pub mod render;

pub use error::*;
pub use contour::*;
pub use wavelet::*;
pub use render::*;

pub use flo_curves as curves;
