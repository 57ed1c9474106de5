mod frame_size;
mod coverage_matrix;
mod lattice_sampler;
mod wavelet_rasterizer;

pub use frame_size::*;
pub use coverage_matrix::*;
pub use lattice_sampler::*;
pub use wavelet_rasterizer::*;
