pub mod intersect_3d;
pub mod polygon_3d;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global tolerance for exact floating-point comparisons.
///
/// Modelling precision (how close two points must be to count as one) is a
/// separate, caller-supplied tolerance threaded through every operation.
pub const TOLERANCE: f64 = 1e-10;
