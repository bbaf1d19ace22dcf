use crate::error::{GeometryError, Result};
use crate::geometry::{Curve, Plane, PolylineCurve};
use crate::kernel::FaceSplit;
use crate::math::polygon_3d::{
    centroid, dedup_loop, distance_to_segment, max_plane_deviation, point_in_polygon_3d,
    polygon_area_3d, project_to_uv, unit_normal,
};
use crate::math::Point3;
use crate::operations::creation::{MakeFace, MakeWire};
use crate::topology::{FaceId, TopologyStore};

/// A planar face with a single polygonal outer loop.
///
/// Each face owns the small topology store holding its vertices, edges and
/// wire, so faces can be handed out and dropped independently.
#[derive(Debug, Clone)]
pub struct PlanarFace {
    store: TopologyStore,
    face: FaceId,
}

impl PlanarFace {
    /// Builds a face from a closed, planar polyline.
    ///
    /// # Errors
    ///
    /// Returns an error if the curve does not close within `tolerance`, is
    /// degenerate, or deviates from its plane by more than `tolerance`.
    pub fn from_curve(curve: &PolylineCurve, tolerance: f64) -> Result<Self> {
        if !curve.is_closed_within(tolerance) {
            return Err(GeometryError::NotClosed.into());
        }
        let curve = curve.snap_closed(tolerance);
        let corners = dedup_loop(curve.vertex_loop().to_vec(), tolerance);
        let normal = unit_normal(&corners)
            .ok_or_else(|| GeometryError::Degenerate("boundary encloses no area".into()))?;
        let center = centroid(&corners);
        let deviation = max_plane_deviation(&corners, &center, &normal);
        if deviation > tolerance {
            return Err(GeometryError::NonPlanar { deviation }.into());
        }
        Self::from_loop(corners, Plane::from_normal(center, normal)?)
    }

    /// Builds a face on `plane` bounded by a loop of corners.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than three corners are given or two
    /// consecutive corners coincide.
    pub fn from_loop(corners: Vec<Point3>, plane: Plane) -> Result<Self> {
        let mut store = TopologyStore::new();
        let wire = MakeWire::new(corners, true).execute(&mut store)?;
        let face = MakeFace::new(wire, plane).execute(&mut store)?;
        Ok(Self { store, face })
    }

    /// The supporting plane.
    ///
    /// # Errors
    ///
    /// Returns an error if the face is missing from its store.
    pub fn plane(&self) -> Result<&Plane> {
        Ok(&self.store.face(self.face)?.surface)
    }

    /// Corners of the outer loop in wire order.
    ///
    /// # Errors
    ///
    /// Returns an error if the face topology is broken.
    pub fn corners(&self) -> Result<Vec<Point3>> {
        self.store.face_loop(self.face)
    }

    /// Outer loop edges as `(from, to)` segments.
    ///
    /// # Errors
    ///
    /// Returns an error if the face topology is broken.
    pub fn boundary_segments(&self) -> Result<Vec<(Point3, Point3)>> {
        let face = self.store.face(self.face)?;
        self.store.wire_segments(face.outer_wire)
    }
}

/// Splits a face by chords, one after another.
///
/// A chord is first clipped to the spans that run through the interior of
/// the current sub-faces, so a chord lying partly along the boundary still
/// cuts along its inner part. Each span cuts the sub-face it crosses, which
/// is replaced in place by its two halves. Chords with no such span are
/// reported as unused.
pub(super) fn split_planar_face(
    face: &PlanarFace,
    chords: &[PolylineCurve],
    tolerance: f64,
) -> Result<FaceSplit<PlanarFace>> {
    let plane = face.plane()?;
    let mut loops = vec![face.corners()?];
    let mut unused_chords = Vec::new();

    for (index, chord) in chords.iter().enumerate() {
        let (a, b) = (*chord.start(), *chord.end());
        let spans: Vec<(Point3, Point3)> = loops
            .iter()
            .flat_map(|corners| interior_spans(corners, &a, &b, plane, tolerance))
            .collect();

        let mut used = false;
        for (from, to) in spans {
            let split = loops.iter().enumerate().find_map(|(i, corners)| {
                split_loop_by_chord(corners, &from, &to, plane, tolerance).map(|halves| (i, halves))
            });
            if let Some((i, (first, second))) = split {
                loops[i] = first;
                loops.insert(i + 1, second);
                used = true;
            }
        }
        if !used {
            tracing::debug!(chord = index, "chord crosses no sub-face");
            unused_chords.push(index);
        }
    }

    let faces = loops
        .into_iter()
        .map(|corners| PlanarFace::from_loop(corners, plane.clone()))
        .collect::<Result<Vec<_>>>()?;
    Ok(FaceSplit {
        faces,
        unused_chords,
    })
}

/// Pieces of the segment `a -> b` that run through the interior of the
/// polygon, cut wherever the segment meets the boundary.
fn interior_spans(
    corners: &[Point3],
    a: &Point3,
    b: &Point3,
    plane: &Plane,
    tolerance: f64,
) -> Vec<(Point3, Point3)> {
    let dir = b - a;
    let len = dir.norm();
    if len <= tolerance {
        return Vec::new();
    }

    let mut stops = vec![0.0, 1.0];
    for corner in corners {
        if distance_to_segment(corner, a, b) <= tolerance {
            stops.push(((corner - a).dot(&dir) / (len * len)).clamp(0.0, 1.0));
        }
    }
    let (au, av) = project_to_uv(a, plane);
    let (bu, bv) = project_to_uv(b, plane);
    let (du, dv) = (bu - au, bv - av);
    let n = corners.len();
    for i in 0..n {
        let (pu, pv) = project_to_uv(&corners[i], plane);
        let (qu, qv) = project_to_uv(&corners[(i + 1) % n], plane);
        let (eu, ev) = (qu - pu, qv - pv);
        let denom = du * ev - dv * eu;
        // Edges parallel to the chord only meet it at corners, handled above.
        if denom.abs() <= f64::EPSILON * len * len {
            continue;
        }
        let (wu, wv) = (pu - au, pv - av);
        let s = (wu * ev - wv * eu) / denom;
        let u = (wu * dv - wv * du) / denom;
        if (0.0..=1.0).contains(&u) && (0.0..=1.0).contains(&s) {
            stops.push(s);
        }
    }
    stops.sort_by(f64::total_cmp);
    stops.dedup_by(|later, earlier| (*later - *earlier) * len <= tolerance);

    stops
        .windows(2)
        .filter_map(|w| {
            let from = a + dir * w[0];
            let to = a + dir * w[1];
            let mid = nalgebra::center(&from, &to);
            let inside = boundary_distance(corners, &mid) > tolerance
                && point_in_polygon_3d(&mid, corners, plane);
            inside.then_some((from, to))
        })
        .collect()
}

/// Splits a polygon along the chord `a -> b`.
///
/// Both chord ends must lie on distinct edges of the polygon and the chord
/// must run through its interior. Returns `None` otherwise, or if either
/// half would be degenerate.
fn split_loop_by_chord(
    corners: &[Point3],
    a: &Point3,
    b: &Point3,
    plane: &Plane,
    tolerance: f64,
) -> Option<(Vec<Point3>, Vec<Point3>)> {
    let edge_a = locate_on_boundary(corners, a, tolerance)?;
    let edge_b = locate_on_boundary(corners, b, tolerance)?;
    if edge_a == edge_b {
        return None;
    }
    let mid = nalgebra::center(a, b);
    if boundary_distance(corners, &mid) <= tolerance
        || !point_in_polygon_3d(&mid, corners, plane)
    {
        return None;
    }

    let first = walk(corners, a, edge_a, edge_b, b, tolerance);
    let second = walk(corners, b, edge_b, edge_a, a, tolerance);
    let min_area = tolerance * tolerance;
    let valid = |half: &[Point3]| {
        half.len() >= 3 && polygon_area_3d(half, plane.normal()) > min_area
    };
    (valid(first.as_slice()) && valid(second.as_slice())).then_some((first, second))
}

/// Index of the closest edge within `tolerance` of `point`.
fn locate_on_boundary(corners: &[Point3], point: &Point3, tolerance: f64) -> Option<usize> {
    let n = corners.len();
    (0..n)
        .map(|i| (i, distance_to_segment(point, &corners[i], &corners[(i + 1) % n])))
        .filter(|(_, d)| *d <= tolerance)
        .min_by(|x, y| x.1.total_cmp(&y.1))
        .map(|(i, _)| i)
}

fn boundary_distance(corners: &[Point3], point: &Point3) -> f64 {
    let n = corners.len();
    (0..n)
        .map(|i| distance_to_segment(point, &corners[i], &corners[(i + 1) % n]))
        .fold(f64::INFINITY, f64::min)
}

/// Loop from `from` (on edge `from_edge`) forward along the boundary to
/// `to` (on edge `to_edge`), closed by the chord back to `from`.
fn walk(
    corners: &[Point3],
    from: &Point3,
    from_edge: usize,
    to_edge: usize,
    to: &Point3,
    tolerance: f64,
) -> Vec<Point3> {
    let n = corners.len();
    let mut points = vec![*from];
    let mut k = (from_edge + 1) % n;
    loop {
        points.push(corners[k]);
        if k == to_edge {
            break;
        }
        k = (k + 1) % n;
    }
    points.push(*to);
    dedup_loop(points, tolerance)
}
