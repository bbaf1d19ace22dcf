use crate::error::Result;
use crate::geometry::{Ellipse, Plane, PolylineCurve};
use crate::math::Point3;
use crate::tessellation::{TessellateCurve, TessellationParams};

/// Creates a closed, tessellated circle in the world XY orientation.
///
/// The boundary starts on the +X side of the center and runs
/// counter-clockwise seen from +Z.
pub struct MakeCircle {
    center: Point3,
    radius: f64,
    params: TessellationParams,
}

impl MakeCircle {
    /// Creates a new `MakeCircle` operation.
    #[must_use]
    pub fn new(center: Point3, radius: f64) -> Self {
        Self {
            center,
            radius,
            params: TessellationParams::default(),
        }
    }

    /// Sets custom tessellation parameters.
    #[must_use]
    pub fn with_params(mut self, params: TessellationParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the operation, returning the closed boundary.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not positive or tessellation fails.
    pub fn execute(&self) -> Result<PolylineCurve> {
        let circle = Ellipse::circle(self.center, self.radius)?;
        TessellateCurve::new(&circle, self.params).execute()
    }
}

/// Creates a closed, tessellated ellipse with axes along world X and Y.
pub struct MakeEllipse {
    center: Point3,
    radius_x: f64,
    radius_y: f64,
    params: TessellationParams,
}

impl MakeEllipse {
    /// Creates a new `MakeEllipse` operation.
    #[must_use]
    pub fn new(center: Point3, radius_x: f64, radius_y: f64) -> Self {
        Self {
            center,
            radius_x,
            radius_y,
            params: TessellationParams::default(),
        }
    }

    /// Sets custom tessellation parameters.
    #[must_use]
    pub fn with_params(mut self, params: TessellationParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the operation, returning the closed boundary.
    ///
    /// # Errors
    ///
    /// Returns an error if a radius is not positive or tessellation fails.
    pub fn execute(&self) -> Result<PolylineCurve> {
        let plane = Plane::world_xy().with_origin(self.center);
        let ellipse = Ellipse::new(plane, self.radius_x, self.radius_y)?;
        TessellateCurve::new(&ellipse, self.params).execute()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::Curve;

    #[test]
    fn circle_is_closed_and_round() {
        let circle = MakeCircle::new(Point3::new(1.0, 2.0, 0.0), 30.0)
            .execute()
            .unwrap();
        assert!(circle.is_closed());
        for p in circle.points() {
            let r = (p - Point3::new(1.0, 2.0, 0.0)).norm();
            assert!((r - 30.0).abs() < 1e-9, "radius {r}");
        }
    }

    #[test]
    fn ellipse_respects_radii() {
        let ellipse = MakeEllipse::new(Point3::origin(), 40.0, 10.0)
            .execute()
            .unwrap();
        let max_x = ellipse.points().iter().map(|p| p.x).fold(f64::MIN, f64::max);
        let max_y = ellipse.points().iter().map(|p| p.y).fold(f64::MIN, f64::max);
        assert!((max_x - 40.0).abs() < 1e-9);
        assert!((max_y - 10.0).abs() < 1e-9);
    }

    #[test]
    fn non_positive_radius_fails() {
        assert!(MakeCircle::new(Point3::origin(), -1.0).execute().is_err());
    }
}
