use crate::geometry::PolylineCurve;
use crate::math::polygon_3d::{centroid, max_plane_deviation, unit_normal};

/// Measures how far a polyline strays from its best-fit plane.
///
/// The plane passes through the centroid of the corners with the Newell
/// normal. Collinear polylines lie in infinitely many planes and report a
/// deviation of zero.
pub struct Planarity<'a> {
    curve: &'a PolylineCurve,
}

impl<'a> Planarity<'a> {
    /// Creates a new `Planarity` query.
    #[must_use]
    pub fn new(curve: &'a PolylineCurve) -> Self {
        Self { curve }
    }

    /// Executes the query, returning the largest distance of a corner from
    /// the fitted plane.
    #[must_use]
    pub fn execute(&self) -> f64 {
        let corners = self.curve.vertex_loop();
        unit_normal(corners).map_or(0.0, |normal| {
            max_plane_deviation(corners, &centroid(corners), &normal)
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use crate::operations::creation::{MakePolygon, MakeRectangle};

    #[test]
    fn flat_rectangle_has_no_deviation() {
        let rect = MakeRectangle::square(3.0).execute().unwrap();
        assert!(Planarity::new(&rect).execute() < 1e-12);
    }

    #[test]
    fn warped_loop_deviates() {
        let warped = MakePolygon::new(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(20.0, 0.0, 10.0),
            Point3::new(20.0, 25.0, 0.0),
            Point3::new(0.0, 25.0, 10.0),
        ])
        .execute()
        .unwrap();
        assert!((Planarity::new(&warped).execute() - 5.0).abs() < 1e-9);
    }

    #[test]
    fn straight_polyline_counts_as_flat() {
        let line = PolylineCurve::new(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 1.0),
        ])
        .unwrap();
        assert!(Planarity::new(&line).execute() < 1e-12);
    }
}
