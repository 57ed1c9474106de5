mod dyadic_cell;
mod haar_basis;
mod coefficient_table;
mod coverage_evaluator;

pub use dyadic_cell::*;
pub use haar_basis::*;
pub use coefficient_table::*;
pub use coverage_evaluator::*;
