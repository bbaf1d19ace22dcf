use std::borrow::Cow;

use crate::error::{GeometryError, Result};
use crate::math::{Point3, TOLERANCE};

use super::curve::{Curve, CurveDomain};

/// A piecewise-linear curve through an ordered list of 3D points.
///
/// The curve is closed when its last point repeats the first one. Vertex
/// `i` sits at parameter `t = i`, so the domain is `[0, n - 1]` and a
/// fractional parameter interpolates linearly along segment `floor(t)`.
#[derive(Debug, Clone, PartialEq)]
pub struct PolylineCurve {
    points: Vec<Point3>,
}

impl PolylineCurve {
    /// Creates a polyline through the given points, open or closed as given.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two points are supplied.
    pub fn new(points: Vec<Point3>) -> Result<Self> {
        if points.len() < 2 {
            return Err(GeometryError::Degenerate(format!(
                "polyline needs at least 2 points, got {}",
                points.len()
            ))
            .into());
        }
        Ok(Self { points })
    }

    /// Creates a closed polyline, repeating the first point at the end if
    /// the caller did not.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than three distinct corners are supplied.
    pub fn closed(mut points: Vec<Point3>) -> Result<Self> {
        let repeats_start = match (points.first(), points.last()) {
            (Some(first), Some(last)) => points.len() > 1 && (first - last).norm() <= TOLERANCE,
            _ => false,
        };
        let corners = if repeats_start {
            points.len() - 1
        } else {
            points.len()
        };
        if corners < 3 {
            return Err(GeometryError::Degenerate(format!(
                "closed polyline needs at least 3 corners, got {corners}"
            ))
            .into());
        }
        if repeats_start {
            let first = points[0];
            if let Some(last) = points.last_mut() {
                *last = first;
            }
        } else {
            points.push(points[0]);
        }
        Ok(Self { points })
    }

    /// Returns all points, including the repeated closing point.
    #[must_use]
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Returns the corner loop: all points without the repeated closing point.
    #[must_use]
    pub fn vertex_loop(&self) -> &[Point3] {
        if self.is_closed() {
            &self.points[..self.points.len() - 1]
        } else {
            &self.points
        }
    }

    /// Whether the last point comes back to the first within `tolerance`.
    #[must_use]
    pub fn is_closed_within(&self, tolerance: f64) -> bool {
        self.points.len() >= 4 && (self.start() - self.end()).norm() <= tolerance
    }

    /// The curve with its last point moved onto the first when the two are
    /// within `tolerance` but not equal. Other curves come back unchanged.
    #[must_use]
    pub fn snap_closed(&self, tolerance: f64) -> Cow<'_, Self> {
        if self.is_closed() || !self.is_closed_within(tolerance) {
            return Cow::Borrowed(self);
        }
        let mut points = self.points.clone();
        let last = points.len() - 1;
        points[last] = points[0];
        Cow::Owned(Self { points })
    }

    /// Number of straight segments.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.points.len() - 1
    }

    /// First point of the polyline.
    #[must_use]
    pub fn start(&self) -> &Point3 {
        &self.points[0]
    }

    /// Last point of the polyline.
    #[must_use]
    pub fn end(&self) -> &Point3 {
        &self.points[self.points.len() - 1]
    }

    /// Returns the polyline traversed in the opposite direction.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut points = self.points.clone();
        points.reverse();
        Self { points }
    }

    /// Extracts the portion of the curve between two parameters.
    ///
    /// For `t0 < t1` the piece runs forward from `t0` to `t1`. On a closed
    /// curve `t1 <= t0` selects the piece that wraps across the seam.
    ///
    /// # Errors
    ///
    /// Returns an error if a parameter is outside the domain, if an open
    /// curve is asked to wrap, or if the piece collapses to a point.
    pub fn sub_curve(&self, t0: f64, t1: f64) -> Result<Self> {
        let domain = self.domain();
        for t in [t0, t1] {
            if !domain.contains(t, TOLERANCE) {
                return Err(GeometryError::ParameterOutOfRange {
                    parameter: "t",
                    value: t,
                    min: domain.t_min,
                    max: domain.t_max,
                }
                .into());
            }
        }
        let t0 = t0.clamp(domain.t_min, domain.t_max);
        let t1 = t1.clamp(domain.t_min, domain.t_max);

        let mut points = Vec::new();
        if t0 < t1 {
            self.collect_between(t0, t1, &mut points);
        } else if self.is_closed() {
            self.collect_between(t0, domain.t_max, &mut points);
            self.collect_between(domain.t_min, t1, &mut points);
        } else {
            return Err(GeometryError::Degenerate(format!(
                "open polyline cannot wrap from {t0} to {t1}"
            ))
            .into());
        }

        points.dedup_by(|b, a| (*b - *a).norm() <= TOLERANCE);
        Self::new(points)
    }

    /// Pushes the point at `a`, every vertex strictly between `a` and `b`,
    /// and the point at `b`.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    fn collect_between(&self, a: f64, b: f64, out: &mut Vec<Point3>) {
        out.push(self.point_at(a));
        let first = a.floor() as usize + 1;
        let last = b.ceil() as usize;
        for i in first..last {
            if (i as f64) > a && (i as f64) < b {
                out.push(self.points[i]);
            }
        }
        out.push(self.point_at(b));
    }

    /// Linear interpolation at a parameter already clamped to the domain.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    fn point_at(&self, t: f64) -> Point3 {
        let last_segment = self.segment_count() - 1;
        let i = (t.floor().max(0.0) as usize).min(last_segment);
        let f = t - i as f64;
        let a = &self.points[i];
        let b = &self.points[i + 1];
        a + (b - a) * f
    }
}

impl Curve for PolylineCurve {
    fn evaluate(&self, t: f64) -> Result<Point3> {
        let domain = self.domain();
        if !domain.contains(t, TOLERANCE) {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "t",
                value: t,
                min: domain.t_min,
                max: domain.t_max,
            }
            .into());
        }
        Ok(self.point_at(t.clamp(domain.t_min, domain.t_max)))
    }

    #[allow(clippy::cast_precision_loss)]
    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, self.segment_count() as f64)
    }

    fn is_closed(&self) -> bool {
        self.is_closed_within(TOLERANCE)
    }
}
