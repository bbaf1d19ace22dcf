use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};

use super::{Curve, CurveDomain};

/// A bounded line segment parameterized by arc length.
///
/// The parametric form is `P(t) = start + t * direction` for
/// `t ∈ [0, length]`, with `direction` of unit length.
#[derive(Debug, Clone)]
pub struct Line {
    start: Point3,
    direction: Vector3,
    length: f64,
}

impl Line {
    /// Creates a segment between two points.
    ///
    /// # Errors
    ///
    /// Returns an error if the points coincide.
    pub fn between(start: Point3, end: Point3) -> Result<Self> {
        let delta = end - start;
        let length = delta.norm();
        if length < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(Self {
            start,
            direction: delta / length,
            length,
        })
    }

    /// Returns the start point of the segment.
    #[must_use]
    pub fn start(&self) -> &Point3 {
        &self.start
    }

    /// Returns the end point of the segment.
    #[must_use]
    pub fn end(&self) -> Point3 {
        self.start + self.direction * self.length
    }

    /// Returns the unit direction of the segment.
    #[must_use]
    pub fn direction(&self) -> &Vector3 {
        &self.direction
    }

    /// Returns the segment length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }
}

impl Curve for Line {
    fn evaluate(&self, t: f64) -> Result<Point3> {
        if !self.domain().contains(t, TOLERANCE) {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "t",
                value: t,
                min: 0.0,
                max: self.length,
            }
            .into());
        }
        Ok(self.start + self.direction * t)
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, self.length)
    }

    fn is_closed(&self) -> bool {
        false
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn evaluates_by_arc_length() {
        let line = Line::between(Point3::origin(), Point3::new(3.0, 4.0, 0.0)).unwrap();
        assert_abs_diff_eq!(line.length(), 5.0);
        let mid = line.evaluate(2.5).unwrap();
        assert_abs_diff_eq!((mid - Point3::new(1.5, 2.0, 0.0)).norm(), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!((line.end() - Point3::new(3.0, 4.0, 0.0)).norm(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn out_of_range_parameter_fails() {
        let line = Line::between(Point3::origin(), Point3::new(1.0, 0.0, 0.0)).unwrap();
        assert!(line.evaluate(1.5).is_err());
        assert!(!line.is_closed());
    }

    #[test]
    fn coincident_points_fail() {
        assert!(Line::between(Point3::origin(), Point3::origin()).is_err());
    }
}
