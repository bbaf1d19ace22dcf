use crate::error::{GeometryError, Result, SplitError};
use crate::geometry::{Curve, Plane};
use crate::math::{Point3, Vector3, TOLERANCE};

/// Creates evenly spaced parallel planes across a boundary from an azimuth.
///
/// The azimuth is measured in degrees clockwise from north (+Y) and taken
/// modulo 360. Cuts run along the azimuth direction, so the planes are
/// vertical with horizontal normals perpendicular to it. The planes span
/// from the boundary's start point to its mid-domain point: `count + 1`
/// planes in marching order, each normal pointing back against the march,
/// ready for [`IncrementalSplitter`](crate::operations::divide::IncrementalSplitter).
pub struct AzimuthDivider {
    azimuth: f64,
    count: usize,
}

impl AzimuthDivider {
    /// Creates a new `AzimuthDivider` operation.
    #[must_use]
    pub fn new(azimuth_degrees: f64, count: usize) -> Self {
        Self {
            azimuth: azimuth_degrees,
            count,
        }
    }

    /// Executes the operation, returning the planes in marching order.
    ///
    /// # Errors
    ///
    /// Returns an error if `count` is zero, the azimuth is not finite, or
    /// the start and mid-domain points do not separate along the normal.
    #[allow(clippy::cast_precision_loss)]
    pub fn execute<C: Curve + ?Sized>(&self, boundary: &C) -> Result<Vec<Plane>> {
        if self.count == 0 {
            return Err(SplitError::InvalidParameters("divider count must be positive".into()).into());
        }
        if !self.azimuth.is_finite() {
            return Err(SplitError::InvalidParameters(format!(
                "azimuth must be finite, got {}",
                self.azimuth
            ))
            .into());
        }

        let angle = self.azimuth.rem_euclid(360.0).to_radians();
        let normal = Vector3::new(angle.cos(), -angle.sin(), 0.0);
        let start = boundary.point_at_start()?;
        let middle = boundary.evaluate(boundary.domain().mid())?;
        let span = (middle - start).dot(&normal);
        if span.abs() < TOLERANCE {
            return Err(GeometryError::Degenerate(format!(
                "boundary has no extent across azimuth {}",
                self.azimuth
            ))
            .into());
        }

        let march = normal * span.signum();
        let step = span.abs() / self.count as f64;
        (0..=self.count)
            .map(|k| Plane::from_normal(start + march * (step * k as f64), -march))
            .collect()
    }
}

/// Azimuth in degrees, in `[0, 360)`, of the horizontal direction from
/// `start` to `end`, rounded to two decimals (ties to even).
#[must_use]
pub fn azimuth_between(start: &Point3, end: &Point3) -> f64 {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    let azimuth = (360.0 + dx.atan2(dy).to_degrees()) % 360.0;
    (azimuth * 100.0).round_ties_even() / 100.0
}

/// Orders parallel planes by descending offset along the first plane's
/// normal, the order in which the incremental strategy peels regions off
/// one end of the boundary.
pub fn sort_along_normal(planes: &mut [Plane]) {
    let Some(first) = planes.first() else {
        return;
    };
    let normal = *first.normal();
    planes.sort_by(|a, b| b.offset_along(&normal).total_cmp(&a.offset_along(&normal)));
}
