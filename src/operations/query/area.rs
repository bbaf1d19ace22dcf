use crate::error::{GeometryError, Result};
use crate::geometry::{Curve, PolylineCurve};
use crate::math::polygon_3d::{polygon_area_3d, unit_normal};

/// Computes the area enclosed by a closed planar polyline.
///
/// The polygon is projected along its Newell normal, so the result does not
/// depend on the loop's winding or on which plane it lies in.
pub struct Area<'a> {
    curve: &'a PolylineCurve,
}

impl<'a> Area<'a> {
    /// Creates a new `Area` query.
    #[must_use]
    pub fn new(curve: &'a PolylineCurve) -> Self {
        Self { curve }
    }

    /// Executes the query, returning the enclosed area.
    ///
    /// # Errors
    ///
    /// Returns an error if the curve is not closed.
    pub fn execute(&self) -> Result<f64> {
        if !self.curve.is_closed() {
            return Err(GeometryError::NotClosed.into());
        }
        let corners = self.curve.vertex_loop();
        Ok(unit_normal(corners).map_or(0.0, |normal| polygon_area_3d(corners, &normal)))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use crate::operations::creation::{MakeCircle, MakeRectangle};
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn rectangle_area() {
        let rect = MakeRectangle::centered(Point3::origin(), 5000.0, 1000.0)
            .execute()
            .unwrap();
        assert_relative_eq!(Area::new(&rect).execute().unwrap(), 5_000_000.0);
    }

    #[test]
    fn clockwise_loop_has_positive_area() {
        let rect = MakeRectangle::square(2.0).execute().unwrap().reversed();
        assert_relative_eq!(Area::new(&rect).execute().unwrap(), 4.0);
    }

    #[test]
    fn tessellated_circle_area_is_close() {
        let circle = MakeCircle::new(Point3::origin(), 30.0).execute().unwrap();
        let area = Area::new(&circle).execute().unwrap();
        let exact = PI * 900.0;
        assert!(area < exact);
        assert!((exact - area) / exact < 1e-3, "area {area}");
    }

    #[test]
    fn open_curve_has_no_area() {
        let open = PolylineCurve::new(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
        ])
        .unwrap();
        assert!(Area::new(&open).execute().is_err());
    }
}
