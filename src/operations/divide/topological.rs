use crate::error::{Result, SplitError};
use crate::geometry::Plane;
use crate::kernel::GeometryKernel;

use super::validate::{validate_planar, validate_planes};
use super::{Division, SplitParams, SplitStrategy};

/// Divides a boundary by splitting its planar face with every chord at once.
///
/// Plane order does not matter. Regions come out in the face splitter's
/// order. The boundary must be planar, and at least one plane must cut it.
/// Planes whose chord cuts no sub-face are reported as skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct TopologicalSplitter;

impl SplitStrategy for TopologicalSplitter {
    fn divide<K: GeometryKernel>(
        &self,
        kernel: &K,
        boundary: &K::Curve,
        planes: &[Plane],
        params: &SplitParams,
    ) -> Result<Division<K::Curve>> {
        validate_planes(kernel, boundary, planes, params)?;
        let tolerance = params.tolerance;
        validate_planar(kernel, boundary, tolerance)?;

        let face = kernel.create_planar_face(boundary, tolerance)?;

        let mut chords = Vec::with_capacity(planes.len());
        let mut chord_planes = Vec::with_capacity(planes.len());
        let mut skipped_planes = Vec::new();
        for (index, plane) in planes.iter().enumerate() {
            let events = kernel.intersect_curve_plane(boundary, plane, tolerance)?;
            match events.as_slice() {
                [a, b, ..] if (b.point - a.point).norm() > tolerance => {
                    chords.push(kernel.line_curve(a.point, b.point, tolerance)?);
                    chord_planes.push(index);
                }
                _ => {
                    tracing::debug!(plane = index, "plane does not cut the boundary");
                    skipped_planes.push(index);
                }
            }
        }
        if chords.is_empty() {
            return Err(SplitError::NoIntersectingPlanes.into());
        }

        let split = kernel.split_face(&face, &chords, tolerance)?;
        if split.unused_chords.len() == chords.len() {
            return Err(SplitError::NoIntersectingPlanes.into());
        }
        for &plane in split.unused_chords.iter().filter_map(|i| chord_planes.get(*i)) {
            tracing::debug!(plane, "chord cuts no sub-face");
            skipped_planes.push(plane);
        }
        skipped_planes.sort_unstable();

        let mut regions = Vec::with_capacity(split.faces.len());
        for (face_index, sub_face) in split.faces.iter().enumerate() {
            let edges = kernel.face_boundary_edges(sub_face)?;
            let mut joined = kernel.join_curves(&edges, tolerance)?;
            let pieces = joined.len();
            match joined.pop() {
                Some(curve) if pieces == 1 && kernel.is_closed(&curve, tolerance) => {
                    regions.push(curve);
                }
                _ => return Err(SplitError::FaceJoinFailure { face_index, pieces }.into()),
            }
        }

        Ok(Division {
            regions,
            skipped_planes,
        })
    }
}
