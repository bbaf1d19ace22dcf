use std::cell::Cell;

use crate::error::Result;
use crate::geometry::{Plane, PolylineCurve};
use crate::kernel::{FaceSplit, GeometryKernel, IntersectionEvent, PlanarFace, PolylineKernel};
use crate::math::Point3;
use crate::operations::query::Aabb;

/// What a [`FaultyKernel`] gets wrong.
#[derive(Debug, Clone, Copy)]
pub(super) enum Fault {
    /// Joins of several pieces succeed this many times, after which the last
    /// piece is left unattached.
    JoinAfter(usize),
    /// `split_face` ignores the chord at this index.
    IdleChord(usize),
    /// `split_face` ignores every chord.
    IdleChords,
}

/// A [`PolylineKernel`] with one injected fault.
#[derive(Debug)]
pub(super) struct FaultyKernel {
    fault: Fault,
    joins: Cell<usize>,
}

impl FaultyKernel {
    pub(super) fn new(fault: Fault) -> Self {
        Self {
            fault,
            joins: Cell::new(0),
        }
    }
}

impl GeometryKernel for FaultyKernel {
    type Curve = PolylineCurve;
    type Face = PlanarFace;

    fn intersect_curve_plane(
        &self,
        curve: &PolylineCurve,
        plane: &Plane,
        tolerance: f64,
    ) -> Result<Vec<IntersectionEvent>> {
        PolylineKernel.intersect_curve_plane(curve, plane, tolerance)
    }

    fn split_curve_at_parameters(
        &self,
        curve: &PolylineCurve,
        parameters: &[f64],
        tolerance: f64,
    ) -> Result<Vec<PolylineCurve>> {
        PolylineKernel.split_curve_at_parameters(curve, parameters, tolerance)
    }

    fn line_curve(&self, start: Point3, end: Point3, tolerance: f64) -> Result<PolylineCurve> {
        PolylineKernel.line_curve(start, end, tolerance)
    }

    fn join_curves(&self, pieces: &[PolylineCurve], tolerance: f64) -> Result<Vec<PolylineCurve>> {
        let Fault::JoinAfter(healthy) = self.fault else {
            return PolylineKernel.join_curves(pieces, tolerance);
        };
        let Some((last, rest)) = pieces.split_last().filter(|(_, rest)| !rest.is_empty()) else {
            return PolylineKernel.join_curves(pieces, tolerance);
        };
        let done = self.joins.get();
        self.joins.set(done + 1);
        if done < healthy {
            return PolylineKernel.join_curves(pieces, tolerance);
        }
        let mut joined = PolylineKernel.join_curves(rest, tolerance)?;
        joined.push(last.clone());
        Ok(joined)
    }

    fn is_closed(&self, curve: &PolylineCurve, tolerance: f64) -> bool {
        PolylineKernel.is_closed(curve, tolerance)
    }

    fn is_planar(&self, curve: &PolylineCurve, tolerance: f64) -> bool {
        PolylineKernel.is_planar(curve, tolerance)
    }

    fn bounding_box(&self, curve: &PolylineCurve) -> Aabb {
        PolylineKernel.bounding_box(curve)
    }

    fn area(&self, curve: &PolylineCurve) -> Result<f64> {
        PolylineKernel.area(curve)
    }

    fn create_planar_face(&self, curve: &PolylineCurve, tolerance: f64) -> Result<PlanarFace> {
        PolylineKernel.create_planar_face(curve, tolerance)
    }

    fn split_face(
        &self,
        face: &PlanarFace,
        chords: &[PolylineCurve],
        tolerance: f64,
    ) -> Result<FaceSplit<PlanarFace>> {
        match self.fault {
            Fault::JoinAfter(_) => PolylineKernel.split_face(face, chords, tolerance),
            Fault::IdleChords => Ok(FaceSplit {
                faces: vec![face.clone()],
                unused_chords: (0..chords.len()).collect(),
            }),
            Fault::IdleChord(idle) => {
                let kept: Vec<PolylineCurve> = chords
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| *i != idle)
                    .map(|(_, chord)| chord.clone())
                    .collect();
                let mut split = PolylineKernel.split_face(face, &kept, tolerance)?;
                for chord in &mut split.unused_chords {
                    if *chord >= idle {
                        *chord += 1;
                    }
                }
                split.unused_chords.push(idle);
                split.unused_chords.sort_unstable();
                Ok(split)
            }
        }
    }

    fn face_boundary_edges(&self, face: &PlanarFace) -> Result<Vec<PolylineCurve>> {
        PolylineKernel.face_boundary_edges(face)
    }
}
