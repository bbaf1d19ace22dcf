pub mod curve;
pub mod plane;
pub mod polyline;

pub use curve::{Curve, CurveDomain, Ellipse, Line};
pub use plane::Plane;
pub use polyline::PolylineCurve;
