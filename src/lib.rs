pub mod error;
pub mod geometry;
pub mod kernel;
pub mod math;
pub mod operations;
pub mod tessellation;
pub mod topology;

pub use error::{Result, SplitCurvesError};
