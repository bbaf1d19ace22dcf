mod ellipse;
mod line;

pub use ellipse::Ellipse;
pub use line::Line;

use crate::error::Result;
use crate::math::Point3;

/// Parameter domain for a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveDomain {
    /// Start of the parameter range.
    pub t_min: f64,
    /// End of the parameter range.
    pub t_max: f64,
}

impl CurveDomain {
    /// Creates a new curve domain.
    #[must_use]
    pub fn new(t_min: f64, t_max: f64) -> Self {
        Self { t_min, t_max }
    }

    /// Parameter halfway through the domain.
    #[must_use]
    pub fn mid(&self) -> f64 {
        0.5 * (self.t_min + self.t_max)
    }

    /// Length of the parameter range.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.t_max - self.t_min
    }

    /// Whether `t` lies inside the domain, allowing `eps` slack at both ends.
    #[must_use]
    pub fn contains(&self, t: f64, eps: f64) -> bool {
        t >= self.t_min - eps && t <= self.t_max + eps
    }
}

/// Trait for bounded parametric curves in 3D space.
pub trait Curve {
    /// Evaluates the curve at parameter `t`, returning the 3D point.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameter is out of range.
    fn evaluate(&self, t: f64) -> Result<Point3>;

    /// Returns the parameter domain of the curve.
    fn domain(&self) -> CurveDomain;

    /// Returns whether the curve is closed.
    fn is_closed(&self) -> bool;

    /// Point at the start of the domain.
    ///
    /// # Errors
    ///
    /// Returns an error if evaluation fails.
    fn point_at_start(&self) -> Result<Point3> {
        self.evaluate(self.domain().t_min)
    }

    /// Point at the end of the domain.
    ///
    /// # Errors
    ///
    /// Returns an error if evaluation fails.
    fn point_at_end(&self) -> Result<Point3> {
        self.evaluate(self.domain().t_max)
    }
}
