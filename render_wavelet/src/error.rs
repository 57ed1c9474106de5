use thiserror::Error;

///
/// Errors that can occur when creating a rasterizer
///
#[derive(Clone, Debug, PartialEq, Error)]
pub enum RasterError {
    /// The frame to render has no pixels in it
    #[error("cannot rasterize to a {width}x{height} frame: both dimensions must be at least 1 pixel")]
    EmptyFrame { width: usize, height: usize },

    /// More levels of coefficients were requested than a table can hold
    #[error("cannot build a table of {num_levels} coefficient levels: the maximum is {maximum}")]
    TooManyLevels { num_levels: usize, maximum: usize },
}

///
/// Errors that can occur when building a contour from a list of points
///
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ContourError {
    /// There are not enough points to make a closed contour of this kind
    #[error("a closed {kind} contour needs at least {minimum} points, but {count} were supplied")]
    TooFewPoints { kind: &'static str, minimum: usize, count: usize },

    /// The points do not divide evenly into sections of the requested kind
    #[error("{count} points cannot be divided into {kind} sections of {per_section} points each")]
    IncompleteSection { kind: &'static str, per_section: usize, count: usize },
}
