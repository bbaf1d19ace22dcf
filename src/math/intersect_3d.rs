use crate::geometry::Plane;

use super::{Point3, Vector3, TOLERANCE};

/// Classification of a point relative to a plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointPlaneClassification {
    /// Point is on the positive side (in the direction of the normal).
    Front,
    /// Point is on the negative side (opposite the normal).
    Back,
    /// Point lies on the plane (within tolerance).
    On,
}

impl PointPlaneClassification {
    /// Returns `1`, `-1` or `0` for front, back and on.
    #[must_use]
    pub fn sign(self) -> i8 {
        match self {
            Self::Front => 1,
            Self::Back => -1,
            Self::On => 0,
        }
    }
}

/// Signed distance from a point to a plane.
/// Positive = on the normal side, negative = opposite.
#[must_use]
pub fn signed_distance_to_plane(point: &Point3, plane: &Plane) -> f64 {
    let diff = point - plane.origin();
    plane.normal().dot(&diff)
}

/// Classifies a point relative to a plane with a modelling tolerance.
#[must_use]
pub fn classify_point_plane(
    point: &Point3,
    plane: &Plane,
    tolerance: f64,
) -> PointPlaneClassification {
    let dist = signed_distance_to_plane(point, plane);
    if dist > tolerance {
        PointPlaneClassification::Front
    } else if dist < -tolerance {
        PointPlaneClassification::Back
    } else {
        PointPlaneClassification::On
    }
}

/// Fraction along the segment `a -> b` at which it crosses a plane, given the
/// signed distances of its endpoints.
///
/// Returns `None` when both endpoints are on the same side.
#[must_use]
pub fn segment_crossing_fraction(dist_a: f64, dist_b: f64) -> Option<f64> {
    if dist_a * dist_b > 0.0 {
        return None;
    }
    let denom = dist_a - dist_b;
    if denom.abs() < TOLERANCE {
        return None;
    }
    Some((dist_a / denom).clamp(0.0, 1.0))
}

/// Magnitude of the cross product of two unit normals, i.e. the sine of the
/// angle between them. Zero for parallel and anti-parallel normals.
#[must_use]
pub fn normal_deviation(a: &Vector3, b: &Vector3) -> f64 {
    a.cross(b).norm()
}
