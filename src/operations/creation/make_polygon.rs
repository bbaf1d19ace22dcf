use crate::error::Result;
use crate::geometry::PolylineCurve;
use crate::math::Point3;

/// Creates a closed polygon boundary through corner points.
///
/// The last corner is connected back to the first; passing the first point
/// again at the end is accepted.
pub struct MakePolygon {
    corners: Vec<Point3>,
}

impl MakePolygon {
    /// Creates a new `MakePolygon` operation.
    #[must_use]
    pub fn new(corners: Vec<Point3>) -> Self {
        Self { corners }
    }

    /// Executes the operation, returning the closed boundary.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than three corners are given.
    pub fn execute(&self) -> Result<PolylineCurve> {
        PolylineCurve::closed(self.corners.clone())
    }
}
