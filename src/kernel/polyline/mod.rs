mod face;
mod intersect;
mod join;

pub use face::PlanarFace;

use crate::error::{GeometryError, Result};
use crate::geometry::{Curve, Plane, PolylineCurve};
use crate::math::{Point3, TOLERANCE};
use crate::operations::query::{Aabb, Area, BoundingBox, Planarity};

use super::{FaceSplit, GeometryKernel, IntersectionEvent};

/// Geometry kernel over [`PolylineCurve`]s and polygonal [`PlanarFace`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct PolylineKernel;

impl PolylineKernel {
    /// Creates the kernel.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl GeometryKernel for PolylineKernel {
    type Curve = PolylineCurve;
    type Face = PlanarFace;

    fn intersect_curve_plane(
        &self,
        curve: &PolylineCurve,
        plane: &Plane,
        tolerance: f64,
    ) -> Result<Vec<IntersectionEvent>> {
        Ok(intersect::intersect_polyline_plane(curve, plane, tolerance))
    }

    /// A closed curve cut at `k` parameters yields `k` pieces, the last one
    /// running across the seam. An open curve yields `k + 1` pieces.
    fn split_curve_at_parameters(
        &self,
        curve: &PolylineCurve,
        parameters: &[f64],
        tolerance: f64,
    ) -> Result<Vec<PolylineCurve>> {
        let curve = curve.snap_closed(tolerance);
        // `tolerance` is a model distance; parameters compare at `TOLERANCE`.
        let domain = curve.domain();
        for &t in parameters {
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

        let closed = curve.is_closed();
        let mut cuts: Vec<f64> = parameters
            .iter()
            .map(|&t| {
                if closed && t >= domain.t_max - TOLERANCE {
                    domain.t_min
                } else {
                    t.clamp(domain.t_min, domain.t_max)
                }
            })
            .collect();
        cuts.sort_by(f64::total_cmp);
        cuts.dedup_by(|b, a| (*b - *a).abs() <= TOLERANCE);

        if closed {
            if cuts.is_empty() {
                return Ok(vec![curve.into_owned()]);
            }
            let k = cuts.len();
            (0..k)
                .map(|i| curve.sub_curve(cuts[i], cuts[(i + 1) % k]))
                .collect()
        } else {
            cuts.retain(|t| *t > domain.t_min + TOLERANCE && *t < domain.t_max - TOLERANCE);
            let mut bounds = Vec::with_capacity(cuts.len() + 2);
            bounds.push(domain.t_min);
            bounds.extend(cuts);
            bounds.push(domain.t_max);
            bounds
                .windows(2)
                .map(|w| curve.sub_curve(w[0], w[1]))
                .collect()
        }
    }

    fn line_curve(&self, start: Point3, end: Point3, tolerance: f64) -> Result<PolylineCurve> {
        if (end - start).norm() <= tolerance {
            return Err(GeometryError::ZeroVector.into());
        }
        PolylineCurve::new(vec![start, end])
    }

    fn join_curves(&self, pieces: &[PolylineCurve], tolerance: f64) -> Result<Vec<PolylineCurve>> {
        join::join_polylines(pieces, tolerance)
    }

    fn is_closed(&self, curve: &PolylineCurve, tolerance: f64) -> bool {
        curve.is_closed_within(tolerance)
    }

    fn is_planar(&self, curve: &PolylineCurve, tolerance: f64) -> bool {
        Planarity::new(curve).execute() <= tolerance
    }

    fn bounding_box(&self, curve: &PolylineCurve) -> Aabb {
        BoundingBox::new(curve).execute()
    }

    fn area(&self, curve: &PolylineCurve) -> Result<f64> {
        Area::new(curve).execute()
    }

    fn create_planar_face(&self, curve: &PolylineCurve, tolerance: f64) -> Result<PlanarFace> {
        PlanarFace::from_curve(curve, tolerance)
    }

    fn split_face(
        &self,
        face: &PlanarFace,
        chords: &[PolylineCurve],
        tolerance: f64,
    ) -> Result<FaceSplit<PlanarFace>> {
        face::split_planar_face(face, chords, tolerance)
    }

    fn face_boundary_edges(&self, face: &PlanarFace) -> Result<Vec<PolylineCurve>> {
        face.boundary_segments()?
            .into_iter()
            .map(|(from, to)| PolylineCurve::new(vec![from, to]))
            .collect()
    }
}
