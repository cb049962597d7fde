pub mod engine;
pub mod geometry;

pub use engine::{calculate_parameters, CalculationError, KiteParameters};
pub use geometry::Dimensions;
