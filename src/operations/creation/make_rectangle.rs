use crate::error::{GeometryError, Result};
use crate::geometry::PolylineCurve;
use crate::math::{Point3, TOLERANCE};

/// Creates a closed axis-aligned rectangle in a plane parallel to world XY.
///
/// Corners run counter-clockwise seen from +Z, starting at the corner with
/// the smallest x and y.
pub struct MakeRectangle {
    min_corner: Point3,
    width: f64,
    height: f64,
}

impl MakeRectangle {
    /// Rectangle whose lower-left corner sits at `corner`.
    #[must_use]
    pub fn from_corner(corner: Point3, width: f64, height: f64) -> Self {
        Self {
            min_corner: corner,
            width,
            height,
        }
    }

    /// Rectangle centered on `center`.
    #[must_use]
    pub fn centered(center: Point3, width: f64, height: f64) -> Self {
        Self {
            min_corner: Point3::new(center.x - width * 0.5, center.y - height * 0.5, center.z),
            width,
            height,
        }
    }

    /// Square with the given edge length centered on the origin.
    #[must_use]
    pub fn square(edge_length: f64) -> Self {
        Self::centered(Point3::origin(), edge_length, edge_length)
    }

    /// Executes the operation, returning the closed boundary.
    ///
    /// # Errors
    ///
    /// Returns an error if the width or height is not positive.
    pub fn execute(&self) -> Result<PolylineCurve> {
        if self.width < TOLERANCE || self.height < TOLERANCE {
            return Err(GeometryError::Degenerate(format!(
                "rectangle sides must be positive, got {} x {}",
                self.width, self.height
            ))
            .into());
        }
        let (x, y, z) = (self.min_corner.x, self.min_corner.y, self.min_corner.z);
        PolylineCurve::closed(vec![
            Point3::new(x, y, z),
            Point3::new(x + self.width, y, z),
            Point3::new(x + self.width, y + self.height, z),
            Point3::new(x, y + self.height, z),
        ])
    }
}
