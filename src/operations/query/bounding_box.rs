use crate::geometry::PolylineCurve;
use crate::math::Point3;

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point3,
    /// Maximum corner of the bounding box.
    pub max: Point3,
}

impl Aabb {
    /// Smallest box containing all points, or `None` for no points.
    #[must_use]
    pub fn from_points(points: &[Point3]) -> Option<Self> {
        let first = points.first()?;
        let mut aabb = Self {
            min: *first,
            max: *first,
        };
        for p in &points[1..] {
            aabb.min = aabb.min.inf(p);
            aabb.max = aabb.max.sup(p);
        }
        Some(aabb)
    }

    /// Center of the box.
    #[must_use]
    pub fn center(&self) -> Point3 {
        nalgebra::center(&self.min, &self.max)
    }
}

/// Computes the axis-aligned bounding box of a polyline.
pub struct BoundingBox<'a> {
    curve: &'a PolylineCurve,
}

impl<'a> BoundingBox<'a> {
    /// Creates a new `BoundingBox` query.
    #[must_use]
    pub fn new(curve: &'a PolylineCurve) -> Self {
        Self { curve }
    }

    /// Executes the query, returning the AABB.
    #[must_use]
    pub fn execute(&self) -> Aabb {
        let points = self.curve.points();
        // A polyline always has at least two points.
        Aabb::from_points(points).unwrap_or(Aabb {
            min: points[0],
            max: points[0],
        })
    }
}
