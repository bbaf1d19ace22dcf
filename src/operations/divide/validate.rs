use crate::error::{Result, SplitError};
use crate::geometry::Plane;
use crate::kernel::GeometryKernel;
use crate::math::intersect_3d::normal_deviation;

use super::SplitParams;

/// Checks the inputs every strategy needs before any geometry is built.
///
/// Checks run in a fixed order: parameters, an empty plane set, parallel
/// normals (anti-parallel counts as parallel), then boundary closure.
///
/// # Errors
///
/// Returns the first failing check as a [`SplitError`].
pub fn validate_planes<K: GeometryKernel>(
    kernel: &K,
    boundary: &K::Curve,
    planes: &[Plane],
    params: &SplitParams,
) -> Result<()> {
    validate_params(params)?;
    let Some(first) = planes.first() else {
        return Err(SplitError::EmptyInput.into());
    };
    let max_deviation = params.angle_tolerance.sin();
    if let Some(index) = planes
        .iter()
        .position(|plane| normal_deviation(plane.normal(), first.normal()) > max_deviation)
    {
        return Err(SplitError::NonParallelPlanes { index }.into());
    }
    if !kernel.is_closed(boundary, params.tolerance) {
        return Err(SplitError::OpenBoundary.into());
    }
    Ok(())
}

/// Checks that the boundary lies in a single plane.
///
/// # Errors
///
/// Returns [`SplitError::NonPlanarBoundary`] otherwise.
pub fn validate_planar<K: GeometryKernel>(
    kernel: &K,
    boundary: &K::Curve,
    tolerance: f64,
) -> Result<()> {
    if kernel.is_planar(boundary, tolerance) {
        Ok(())
    } else {
        Err(SplitError::NonPlanarBoundary.into())
    }
}

fn validate_params(params: &SplitParams) -> Result<()> {
    if !(params.tolerance.is_finite() && params.tolerance > 0.0) {
        return Err(SplitError::InvalidParameters(format!(
            "tolerance must be positive, got {}",
            params.tolerance
        ))
        .into());
    }
    if !(params.angle_tolerance.is_finite()
        && params.angle_tolerance > 0.0
        && params.angle_tolerance < std::f64::consts::FRAC_PI_2)
    {
        return Err(SplitError::InvalidParameters(format!(
            "angle tolerance must be in (0, pi/2), got {}",
            params.angle_tolerance
        ))
        .into());
    }
    Ok(())
}

/// Whether a curve can be offered for splitting: planar and lying in the
/// world XY plane.
pub fn is_splittable<K: GeometryKernel>(kernel: &K, curve: &K::Curve, tolerance: f64) -> bool {
    let aabb = kernel.bounding_box(curve);
    kernel.is_planar(curve, tolerance)
        && aabb.min.z.abs() <= tolerance
        && aabb.max.z.abs() <= tolerance
}

/// Keeps the curves accepted by [`is_splittable`], in input order.
pub fn splittable_boundaries<'a, K: GeometryKernel>(
    kernel: &'a K,
    curves: &'a [K::Curve],
    tolerance: f64,
) -> impl Iterator<Item = &'a K::Curve> + 'a {
    curves
        .iter()
        .filter(move |curve| is_splittable(kernel, curve, tolerance))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::PolylineCurve;
    use crate::kernel::PolylineKernel;
    use crate::math::{Point3, Vector3};
    use crate::operations::creation::{MakePolygon, MakeRectangle};

    fn rect() -> PolylineCurve {
        MakeRectangle::centered(Point3::origin(), 10.0, 4.0)
            .execute()
            .unwrap()
    }

    fn plane(normal: Vector3) -> Plane {
        Plane::from_normal(Point3::origin(), normal).unwrap()
    }

    fn split_error(result: Result<()>) -> SplitError {
        match result.unwrap_err() {
            crate::error::SplitCurvesError::Split(err) => err,
            other => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn accepts_parallel_and_antiparallel() {
        let planes = [plane(Vector3::x()), plane(-Vector3::x())];
        assert!(
            validate_planes(&PolylineKernel, &rect(), &planes, &SplitParams::default()).is_ok()
        );
    }

    #[test]
    fn empty_planes_checked_before_closure() {
        let open = PolylineCurve::new(vec![Point3::origin(), Point3::new(1.0, 0.0, 0.0)]).unwrap();
        let err = split_error(validate_planes(
            &PolylineKernel,
            &open,
            &[],
            &SplitParams::default(),
        ));
        assert!(matches!(err, SplitError::EmptyInput));
    }

    #[test]
    fn reports_first_non_parallel_index() {
        let tilted = Vector3::new(1.0, 0.01, 0.0);
        let planes = [plane(Vector3::x()), plane(Vector3::x()), plane(tilted)];
        let err = split_error(validate_planes(
            &PolylineKernel,
            &rect(),
            &planes,
            &SplitParams::default(),
        ));
        assert!(matches!(err, SplitError::NonParallelPlanes { index: 2 }));
    }

    #[test]
    fn small_tilt_within_angle_tolerance() {
        let planes = [plane(Vector3::x()), plane(Vector3::new(1.0, 1e-4, 0.0))];
        assert!(
            validate_planes(&PolylineKernel, &rect(), &planes, &SplitParams::default()).is_ok()
        );
    }

    #[test]
    fn rejects_bad_tolerance() {
        let params = SplitParams::default().with_tolerance(0.0);
        let err = split_error(validate_planes(
            &PolylineKernel,
            &rect(),
            &[plane(Vector3::x())],
            &params,
        ));
        assert!(matches!(err, SplitError::InvalidParameters(_)));
    }

    #[test]
    fn planarity_check() {
        let warped = MakePolygon::new(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(20.0, 0.0, 10.0),
            Point3::new(20.0, 25.0, 0.0),
            Point3::new(0.0, 25.0, 10.0),
        ])
        .execute()
        .unwrap();
        assert!(validate_planar(&PolylineKernel, &rect(), 1e-3).is_ok());
        assert!(matches!(
            split_error(validate_planar(&PolylineKernel, &warped, 1e-3)),
            SplitError::NonPlanarBoundary
        ));
    }

    #[test]
    fn screening_keeps_flat_xy_curves() {
        let lifted = MakeRectangle::centered(Point3::new(0.0, 0.0, 5.0), 2.0, 2.0)
            .execute()
            .unwrap();
        let curves = vec![rect(), lifted, rect()];
        let kept: Vec<_> = splittable_boundaries(&PolylineKernel, &curves, 1e-3).collect();
        assert_eq!(kept.len(), 2);
    }
}
