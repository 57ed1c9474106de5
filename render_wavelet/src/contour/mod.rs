mod contour_model;
mod quadrant_moments;
mod section;
mod bezier_contour;

pub use contour_model::*;
pub use quadrant_moments::*;
pub use section::*;
pub use bezier_contour::*;
