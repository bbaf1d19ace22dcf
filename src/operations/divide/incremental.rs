use crate::error::{Result, SplitError};
use crate::geometry::Plane;
use crate::kernel::GeometryKernel;

use super::classify::kept_and_remaining;
use super::validate::validate_planes;
use super::{Division, SplitParams, SplitStrategy};

/// Divides a boundary one plane at a time.
///
/// A `remaining` region starts as the boundary. Each plane that crosses it
/// cuts it in two along the chord between the first two crossings; the part
/// with the smaller signed distance becomes an output region and the other
/// part carries on. Whatever remains after the last plane is the final
/// region.
///
/// Regions come out in plane order. Planes sorted by descending offset along
/// their common normal (see [`sort_along_normal`](crate::operations::planes::sort_along_normal))
/// peel the boundary from one end to the other; any other order may leave
/// later planes with nothing to cut.
///
/// Only the first two crossings of each plane are used. A plane crossing a
/// concave remaining region more than twice cuts between those two alone,
/// and its other crossings stay uncut in the remaining region.
#[derive(Debug, Clone, Copy, Default)]
pub struct IncrementalSplitter;

impl SplitStrategy for IncrementalSplitter {
    fn divide<K: GeometryKernel>(
        &self,
        kernel: &K,
        boundary: &K::Curve,
        planes: &[Plane],
        params: &SplitParams,
    ) -> Result<Division<K::Curve>> {
        validate_planes(kernel, boundary, planes, params)?;
        let tolerance = params.tolerance;

        // Joining the lone boundary snaps ends that meet within tolerance.
        let mut remaining = kernel
            .join_curves(std::slice::from_ref(boundary), tolerance)?
            .pop()
            .unwrap_or_else(|| boundary.clone());
        let mut regions = Vec::with_capacity(planes.len() + 1);
        let mut skipped_planes = Vec::new();

        for (index, plane) in planes.iter().enumerate() {
            let events = kernel.intersect_curve_plane(&remaining, plane, tolerance)?;
            if events.len() < 2 {
                tracing::debug!(plane = index, "plane does not cut the remaining region");
                skipped_planes.push(index);
                continue;
            }
            if events.len() > 2 {
                tracing::debug!(
                    plane = index,
                    crossings = events.len(),
                    "using the first two crossings"
                );
            }

            let (a, b) = (events[0], events[1]);
            if (b.point - a.point).norm() <= tolerance {
                tracing::debug!(plane = index, "chord shorter than tolerance");
                skipped_planes.push(index);
                continue;
            }

            let arcs = kernel.split_curve_at_parameters(
                &remaining,
                &[a.parameter, b.parameter],
                tolerance,
            )?;
            let chord = kernel.line_curve(a.point, b.point, tolerance)?;
            let mut candidates = Vec::with_capacity(2);
            for arc in arcs {
                let mut joined = kernel.join_curves(&[chord.clone(), arc], tolerance)?;
                let pieces = joined.len();
                match joined.pop() {
                    Some(curve) if pieces == 1 && kernel.is_closed(&curve, tolerance) => {
                        candidates.push(curve);
                    }
                    _ => {
                        return Err(SplitError::JoinFailure {
                            plane_index: index,
                            pieces,
                        }
                        .into())
                    }
                }
            }

            let [first, second]: [K::Curve; 2] =
                candidates
                    .try_into()
                    .map_err(|rest: Vec<K::Curve>| SplitError::JoinFailure {
                        plane_index: index,
                        pieces: rest.len(),
                    })?;
            let (kept, rest) = kept_and_remaining(kernel, plane, first, second);
            regions.push(kept);
            remaining = rest;
        }

        regions.push(remaining);
        Ok(Division {
            regions,
            skipped_planes,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::SplitCurvesError;
    use crate::geometry::{Curve, PolylineCurve};
    use crate::kernel::PolylineKernel;
    use crate::math::{Point3, Vector3};
    use crate::operations::creation::{MakePolygon, MakeRectangle};
    use crate::operations::divide::test_kernel::{Fault, FaultyKernel};
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    fn x_planes(xs: &[f64]) -> Vec<Plane> {
        xs.iter()
            .map(|x| Plane::from_normal(Point3::new(*x, 0.0, 0.0), Vector3::x()).unwrap())
            .collect()
    }

    fn divide(boundary: &PolylineCurve, planes: &[Plane]) -> Division<PolylineCurve> {
        IncrementalSplitter
            .divide(&PolylineKernel, boundary, planes, &SplitParams::default())
            .unwrap()
    }

    fn total_area(regions: &[PolylineCurve]) -> f64 {
        regions
            .iter()
            .map(|r| PolylineKernel.area(r).unwrap())
            .sum()
    }

    #[test]
    fn peels_strips_in_plane_order() {
        let rect = MakeRectangle::centered(Point3::origin(), 8.0, 2.0)
            .execute()
            .unwrap();
        let division = divide(&rect, &x_planes(&[2.0, 0.0, -2.0]));
        assert_eq!(division.regions.len(), 4);
        let centers: Vec<f64> = division
            .regions
            .iter()
            .map(|r| PolylineKernel.bounding_box_center(r).x)
            .collect();
        for (center, expected) in centers.iter().zip([3.0, 1.0, -1.0, -3.0]) {
            assert_abs_diff_eq!(*center, expected, epsilon = 1e-9);
        }
        for region in &division.regions {
            assert!(region.is_closed());
            assert_abs_diff_eq!(PolylineKernel.area(region).unwrap(), 4.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn missing_planes_are_skipped() {
        let rect = MakeRectangle::centered(Point3::origin(), 8.0, 2.0)
            .execute()
            .unwrap();
        let division = divide(&rect, &x_planes(&[10.0, 0.0, -10.0]));
        assert_eq!(division.regions.len(), 2);
        assert_eq!(division.skipped_planes, vec![0, 2]);
    }

    #[test]
    fn no_crossing_plane_returns_boundary() {
        let rect = MakeRectangle::square(2.0).execute().unwrap();
        let division = divide(&rect, &x_planes(&[5.0]));
        assert_eq!(division.regions, vec![rect]);
        assert_eq!(division.skipped_planes, vec![0]);
    }

    #[test]
    fn ascending_order_strands_later_planes() {
        let rect = MakeRectangle::centered(Point3::origin(), 8.0, 2.0)
            .execute()
            .unwrap();
        let division = divide(&rect, &x_planes(&[-2.0, 0.0, 2.0]));
        assert_eq!(division.regions.len(), 2);
        assert_eq!(division.skipped_planes, vec![1, 2]);
        assert_abs_diff_eq!(total_area(&division.regions), 16.0, epsilon = 1e-9);
    }

    #[test]
    fn anti_parallel_normal_flips_the_kept_side() {
        let rect = MakeRectangle::centered(Point3::origin(), 8.0, 2.0)
            .execute()
            .unwrap();
        let plane = Plane::from_normal(Point3::new(2.0, 0.0, 0.0), -Vector3::x()).unwrap();
        let division = divide(&rect, &[plane]);
        assert_abs_diff_eq!(PolylineKernel.area(&division.regions[0]).unwrap(), 12.0, epsilon = 1e-9);
        assert_abs_diff_eq!(PolylineKernel.area(&division.regions[1]).unwrap(), 4.0, epsilon = 1e-9);
    }

    #[test]
    fn concave_boundary_uses_first_two_crossings() {
        // U shape open towards +Y. A horizontal plane through both legs
        // crosses the boundary four times.
        let u = MakePolygon::new(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(6.0, 0.0, 0.0),
            Point3::new(6.0, 4.0, 0.0),
            Point3::new(4.0, 4.0, 0.0),
            Point3::new(4.0, 1.0, 0.0),
            Point3::new(2.0, 1.0, 0.0),
            Point3::new(2.0, 4.0, 0.0),
            Point3::new(0.0, 4.0, 0.0),
        ])
        .execute()
        .unwrap();
        let plane = Plane::from_normal(Point3::new(0.0, 2.0, 0.0), Vector3::y()).unwrap();
        let events = PolylineKernel.intersect_curve_plane(&u, &plane, 1e-3).unwrap();
        assert_eq!(events.len(), 4);

        let division = divide(&u, &[plane.clone()]);
        assert_eq!(division.regions.len(), 2);
        assert!(division.regions.iter().all(PolylineCurve::is_closed));
        // Only the right leg is cut off; the left leg still crosses the plane.
        assert_abs_diff_eq!(PolylineKernel.area(&division.regions[0]).unwrap(), 4.0, epsilon = 1e-9);
        assert_abs_diff_eq!(PolylineKernel.area(&division.regions[1]).unwrap(), 14.0, epsilon = 1e-9);
        let uncut = PolylineKernel
            .intersect_curve_plane(&division.regions[1], &plane, 1e-3)
            .unwrap();
        assert_eq!(uncut.len(), 2);
    }

    #[test]
    fn unclosable_cut_fails_with_its_plane() {
        let rect = MakeRectangle::centered(Point3::origin(), 10.0, 4.0)
            .execute()
            .unwrap();
        // Both arcs of the first plane join; the second plane's first arc does not.
        let kernel = FaultyKernel::new(Fault::JoinAfter(2));
        let err = IncrementalSplitter
            .divide(&kernel, &rect, &x_planes(&[2.0, -2.0]), &SplitParams::default())
            .unwrap_err();
        assert!(matches!(
            err,
            SplitCurvesError::Split(SplitError::JoinFailure {
                plane_index: 1,
                pieces: 2
            })
        ));
    }

    #[test]
    fn open_boundary_is_rejected() {
        let open = PolylineCurve::new(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(20.0, 0.0, 0.0),
            Point3::new(20.0, 25.0, 0.0),
            Point3::new(0.0, 25.0, 0.0),
        ])
        .unwrap();
        let err = IncrementalSplitter
            .divide(&PolylineKernel, &open, &x_planes(&[10.0]), &SplitParams::default())
            .unwrap_err();
        assert!(matches!(
            err,
            SplitCurvesError::Split(SplitError::OpenBoundary)
        ));
    }

    proptest! {
        #[test]
        fn cuts_preserve_area(
            width in 10.0..500.0_f64,
            height in 1.0..200.0_f64,
            fractions in prop::collection::vec(0.05..0.95_f64, 1..6),
        ) {
            let rect = MakeRectangle::centered(Point3::origin(), width, height)
                .execute()
                .unwrap();
            let mut xs: Vec<f64> = fractions.iter().map(|f| (f - 0.5) * width).collect();
            xs.sort_by(|a, b| b.total_cmp(a));
            xs.dedup_by(|b, a| (*a - *b).abs() < 0.01 * width);

            let division = divide(&rect, &x_planes(&xs));
            prop_assert_eq!(division.regions.len(), xs.len() + 1);
            prop_assert!(division.regions.iter().all(PolylineCurve::is_closed));
            let area = total_area(&division.regions);
            prop_assert!((area - width * height).abs() < 1e-6 * width * height);
        }
    }
}
