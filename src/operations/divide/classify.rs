use crate::geometry::Plane;
use crate::kernel::GeometryKernel;

/// Signed distance used to tell the two sides of a cut apart.
///
/// Computed as `(plane.origin - c) · plane.normal`, where `c` is the center
/// of the curve's bounding box. It is positive when the curve sits behind
/// the plane and negative when it sits on the side the normal points to.
/// Only the sign is meaningful.
pub fn signed_distance<K: GeometryKernel>(kernel: &K, plane: &Plane, curve: &K::Curve) -> f64 {
    let center = kernel.bounding_box_center(curve);
    (plane.origin() - center).dot(plane.normal())
}

/// Orders two candidates of one cut as `(kept, remaining)`.
///
/// The candidate with the smaller signed distance is the region cut off;
/// the other one carries on to the next plane. Ties keep `first`.
pub(super) fn kept_and_remaining<K: GeometryKernel>(
    kernel: &K,
    plane: &Plane,
    first: K::Curve,
    second: K::Curve,
) -> (K::Curve, K::Curve) {
    let d_first = signed_distance(kernel, plane, &first);
    let d_second = signed_distance(kernel, plane, &second);
    tracing::trace!(d_first, d_second, "classified cut candidates");
    if d_first <= d_second {
        (first, second)
    } else {
        (second, first)
    }
}
