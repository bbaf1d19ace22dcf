use crate::geometry::Plane;

use super::{Point3, Vector3, TOLERANCE};

/// Projects a 3D point onto the UV coordinate system of a plane.
///
/// Returns `(u, v)` coordinates.
#[must_use]
pub fn project_to_uv(point: &Point3, plane: &Plane) -> (f64, f64) {
    let diff = point - plane.origin();
    (diff.dot(plane.u_dir()), diff.dot(plane.v_dir()))
}

/// Point-in-polygon test for a 3D point coplanar with the polygon.
///
/// Projects to the plane's UV coordinate space and uses the winding number
/// algorithm. Points on the boundary may land on either side; callers that
/// care test boundary distance first.
#[must_use]
pub fn point_in_polygon_3d(point: &Point3, polygon: &[Point3], plane: &Plane) -> bool {
    if polygon.len() < 3 {
        return false;
    }

    let (px, py) = project_to_uv(point, plane);
    let uvs: Vec<(f64, f64)> = polygon.iter().map(|p| project_to_uv(p, plane)).collect();

    winding_number_2d(px, py, &uvs) != 0
}

/// Winding number of point `(px, py)` with respect to polygon `verts`.
fn winding_number_2d(px: f64, py: f64, verts: &[(f64, f64)]) -> i32 {
    let n = verts.len();
    let mut winding = 0i32;
    for i in 0..n {
        let (x0, y0) = verts[i];
        let (x1, y1) = verts[(i + 1) % n];

        if y0 <= py {
            if y1 > py && cross_2d(x1 - x0, y1 - y0, px - x0, py - y0) > 0.0 {
                winding += 1;
            }
        } else if y1 <= py && cross_2d(x1 - x0, y1 - y0, px - x0, py - y0) < 0.0 {
            winding -= 1;
        }
    }
    winding
}

#[inline]
fn cross_2d(ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    ax * by - ay * bx
}

/// Newell's polygon normal, scaled by twice the polygon area.
///
/// Works for non-convex loops; returns a zero vector for degenerate
/// (collinear or empty) input.
#[must_use]
pub fn newell_normal(points: &[Point3]) -> Vector3 {
    let n = points.len();
    let mut normal = Vector3::zeros();
    if n < 3 {
        return normal;
    }
    for i in 0..n {
        let a = &points[i];
        let b = &points[(i + 1) % n];
        normal.x += (a.y - b.y) * (a.z + b.z);
        normal.y += (a.z - b.z) * (a.x + b.x);
        normal.z += (a.x - b.x) * (a.y + b.y);
    }
    normal
}

/// Unit Newell normal, or `None` when the loop is degenerate.
#[must_use]
pub fn unit_normal(points: &[Point3]) -> Option<Vector3> {
    let normal = newell_normal(points);
    let len = normal.norm();
    (len > TOLERANCE).then(|| normal / len)
}

/// Compute the area of a 3D polygon (coplanar points).
///
/// Uses the cross-product summation method projected along the polygon normal.
#[must_use]
pub fn polygon_area_3d(points: &[Point3], normal: &Vector3) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let n = points.len();
    let mut cross_sum = Vector3::new(0.0, 0.0, 0.0);
    let o = &points[0];
    for i in 1..n {
        let a = points[i] - o;
        let b = points[(i + 1) % n] - o;
        cross_sum += a.cross(&b);
    }
    0.5 * cross_sum.dot(normal).abs()
}

/// Arithmetic mean of the points.
#[must_use]
pub fn centroid(points: &[Point3]) -> Point3 {
    if points.is_empty() {
        return Point3::origin();
    }
    let sum = points
        .iter()
        .fold(Vector3::zeros(), |acc, p| acc + p.coords);
    #[allow(clippy::cast_precision_loss)]
    let count = points.len() as f64;
    Point3::from(sum / count)
}

/// Largest distance of any point from the plane through `origin` with the
/// given unit `normal`.
#[must_use]
pub fn max_plane_deviation(points: &[Point3], origin: &Point3, normal: &Vector3) -> f64 {
    points
        .iter()
        .map(|p| (p - origin).dot(normal).abs())
        .fold(0.0, f64::max)
}

/// Distance from `point` to the closed segment `a -> b`.
#[must_use]
pub fn distance_to_segment(point: &Point3, a: &Point3, b: &Point3) -> f64 {
    let ab = b - a;
    let len_sq = ab.norm_squared();
    if len_sq < TOLERANCE * TOLERANCE {
        return (point - a).norm();
    }
    let t = ((point - a).dot(&ab) / len_sq).clamp(0.0, 1.0);
    (point - (a + ab * t)).norm()
}

/// Removes consecutive points closer than `tolerance`, including a trailing
/// point that repeats the first one.
#[must_use]
pub fn dedup_loop(points: Vec<Point3>, tolerance: f64) -> Vec<Point3> {
    let mut out: Vec<Point3> = Vec::with_capacity(points.len());
    for p in points {
        if out.last().is_none_or(|last| (p - last).norm() > tolerance) {
            out.push(p);
        }
    }
    while out.len() > 1 && (out[out.len() - 1] - out[0]).norm() <= tolerance {
        out.pop();
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn xy_plane() -> Plane {
        Plane::from_normal(p(0.0, 0.0, 0.0), Vector3::z()).unwrap()
    }

    fn unit_square() -> Vec<Point3> {
        vec![
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(1.0, 1.0, 0.0),
            p(0.0, 1.0, 0.0),
        ]
    }

    #[test]
    fn point_inside_and_outside_square() {
        let plane = xy_plane();
        assert!(point_in_polygon_3d(&p(0.5, 0.5, 0.0), &unit_square(), &plane));
        assert!(!point_in_polygon_3d(&p(2.0, 0.5, 0.0), &unit_square(), &plane));
    }

    #[test]
    fn point_in_concave_notch_is_outside() {
        let plane = xy_plane();
        let u_shape = vec![
            p(0.0, 0.0, 0.0),
            p(3.0, 0.0, 0.0),
            p(3.0, 3.0, 0.0),
            p(2.0, 3.0, 0.0),
            p(2.0, 1.0, 0.0),
            p(1.0, 1.0, 0.0),
            p(1.0, 3.0, 0.0),
            p(0.0, 3.0, 0.0),
        ];
        assert!(!point_in_polygon_3d(&p(1.5, 2.0, 0.0), &u_shape, &plane));
        assert!(point_in_polygon_3d(&p(0.5, 2.0, 0.0), &u_shape, &plane));
    }

    #[test]
    fn newell_normal_follows_winding() {
        let normal = unit_normal(&unit_square()).unwrap();
        assert_abs_diff_eq!(normal.z, 1.0, epsilon = 1e-12);
        let mut reversed = unit_square();
        reversed.reverse();
        assert_abs_diff_eq!(unit_normal(&reversed).unwrap().z, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn collinear_points_have_no_normal() {
        let line = vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(2.0, 0.0, 0.0)];
        assert!(unit_normal(&line).is_none());
    }

    #[test]
    fn triangle_area() {
        let tri = vec![p(0.0, 0.0, 0.0), p(4.0, 0.0, 0.0), p(0.0, 3.0, 0.0)];
        assert_abs_diff_eq!(polygon_area_3d(&tri, &Vector3::z()), 6.0);
    }

    #[test]
    fn tilted_square_deviation() {
        let pts = vec![
            p(0.0, 0.0, 0.0),
            p(20.0, 0.0, 10.0),
            p(20.0, 25.0, 0.0),
            p(0.0, 25.0, 10.0),
        ];
        let normal = unit_normal(&pts).unwrap();
        let deviation = max_plane_deviation(&pts, &centroid(&pts), &normal);
        assert!(deviation > 1.0, "deviation {deviation}");
    }

    #[test]
    fn segment_distance_clamps_to_ends() {
        let d = distance_to_segment(&p(3.0, 4.0, 0.0), &p(0.0, 0.0, 0.0), &p(1.0, 0.0, 0.0));
        assert_abs_diff_eq!(d, (4.0f64 + 16.0).sqrt());
        let d = distance_to_segment(&p(0.5, 2.0, 0.0), &p(0.0, 0.0, 0.0), &p(1.0, 0.0, 0.0));
        assert_abs_diff_eq!(d, 2.0);
    }

    #[test]
    fn dedup_loop_drops_repeated_closing_point() {
        let mut pts = unit_square();
        pts.insert(1, p(1e-6, 0.0, 0.0));
        pts.push(p(0.0, 0.0, 0.0));
        let cleaned = dedup_loop(pts, 1e-3);
        assert_eq!(cleaned.len(), 4);
    }
}
