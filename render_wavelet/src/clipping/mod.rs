mod cubic_polynomial;
mod cubic_roots;
mod rectangle_intersections;

pub use cubic_polynomial::*;
pub use cubic_roots::*;
pub use rectangle_intersections::*;
