use std::f64::consts::TAU;

use crate::error::{GeometryError, Result};
use crate::geometry::Plane;
use crate::math::{Point3, TOLERANCE};

use super::{Curve, CurveDomain};

/// A full ellipse lying in a plane.
///
/// `P(t) = origin + radius_u * cos(t) * u_dir + radius_v * sin(t) * v_dir`
/// for `t ∈ [0, 2π]`, where the frame comes from `plane`. The curve is
/// always closed; a circle is an ellipse with equal radii.
#[derive(Debug, Clone)]
pub struct Ellipse {
    plane: Plane,
    radius_u: f64,
    radius_v: f64,
}

impl Ellipse {
    /// Creates an ellipse centered on the plane origin.
    ///
    /// # Errors
    ///
    /// Returns an error if either radius is non-positive.
    pub fn new(plane: Plane, radius_u: f64, radius_v: f64) -> Result<Self> {
        if radius_u < TOLERANCE || radius_v < TOLERANCE {
            return Err(
                GeometryError::Degenerate("ellipse radii must be positive".into()).into(),
            );
        }
        Ok(Self {
            plane,
            radius_u,
            radius_v,
        })
    }

    /// Creates a circle in the world XY orientation, starting on the +X side
    /// of `center`.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is non-positive.
    pub fn circle(center: Point3, radius: f64) -> Result<Self> {
        Self::new(Plane::world_xy().with_origin(center), radius, radius)
    }

    /// Returns the center of the ellipse.
    #[must_use]
    pub fn center(&self) -> &Point3 {
        self.plane.origin()
    }

    /// Returns the plane the ellipse lies in.
    #[must_use]
    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    /// Returns the `(u, v)` radii.
    #[must_use]
    pub fn radii(&self) -> (f64, f64) {
        (self.radius_u, self.radius_v)
    }

    /// Exact enclosed area, `π * a * b`.
    #[must_use]
    pub fn area(&self) -> f64 {
        std::f64::consts::PI * self.radius_u * self.radius_v
    }
}

impl Curve for Ellipse {
    fn evaluate(&self, t: f64) -> Result<Point3> {
        Ok(self
            .plane
            .point_at(self.radius_u * t.cos(), self.radius_v * t.sin()))
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, TAU)
    }

    fn is_closed(&self) -> bool {
        true
    }
}
