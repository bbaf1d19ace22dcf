mod polyline;

pub use polyline::{PlanarFace, PolylineKernel};

use crate::error::Result;
use crate::geometry::Plane;
use crate::math::Point3;
use crate::operations::query::Aabb;

/// A point where a plane crosses a curve, with its curve parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEvent {
    pub point: Point3,
    pub parameter: f64,
}

/// Faces produced by [`GeometryKernel::split_face`].
#[derive(Debug, Clone)]
pub struct FaceSplit<F> {
    pub faces: Vec<F>,
    /// Indices of the chords that cut no face, in ascending order.
    pub unused_chords: Vec<usize>,
}

/// Curve and face primitives consumed by the splitting strategies.
///
/// Strategies only talk to this trait, so they stay independent of the
/// curve representation. [`PolylineKernel`] is the implementation shipped
/// with the crate.
///
/// Every method takes an explicit modelling tolerance where precision
/// matters; implementations must not rely on hidden global constants.
pub trait GeometryKernel {
    /// Curve type handled by the kernel.
    type Curve: Clone;
    /// Planar face type produced by [`create_planar_face`](Self::create_planar_face).
    type Face;

    /// Points where `plane` crosses `curve`, ordered by curve parameter.
    ///
    /// # Errors
    ///
    /// Returns an error if the curve cannot be evaluated.
    fn intersect_curve_plane(
        &self,
        curve: &Self::Curve,
        plane: &Plane,
        tolerance: f64,
    ) -> Result<Vec<IntersectionEvent>>;

    /// Cuts `curve` at the given parameters. A curve whose ends meet within
    /// `tolerance` is cut as a closed curve.
    ///
    /// # Errors
    ///
    /// Returns an error if a parameter lies outside the curve domain or a
    /// piece would collapse to a point.
    fn split_curve_at_parameters(
        &self,
        curve: &Self::Curve,
        parameters: &[f64],
        tolerance: f64,
    ) -> Result<Vec<Self::Curve>>;

    /// Straight curve from `start` to `end`.
    ///
    /// # Errors
    ///
    /// Returns an error if the points are within `tolerance` of each other.
    fn line_curve(&self, start: Point3, end: Point3, tolerance: f64) -> Result<Self::Curve>;

    /// Chains fragments end to end. Each returned curve is either closed or
    /// a leftover open chain.
    ///
    /// # Errors
    ///
    /// Returns an error if a joined chain cannot be represented.
    fn join_curves(&self, pieces: &[Self::Curve], tolerance: f64) -> Result<Vec<Self::Curve>>;

    /// Whether the curve ends where it starts, within `tolerance`.
    fn is_closed(&self, curve: &Self::Curve, tolerance: f64) -> bool;

    fn is_planar(&self, curve: &Self::Curve, tolerance: f64) -> bool;

    fn bounding_box(&self, curve: &Self::Curve) -> Aabb;

    fn bounding_box_center(&self, curve: &Self::Curve) -> Point3 {
        self.bounding_box(curve).center()
    }

    /// Area enclosed by a closed planar curve.
    ///
    /// # Errors
    ///
    /// Returns an error if the curve is open.
    fn area(&self, curve: &Self::Curve) -> Result<f64>;

    /// Builds a planar face bounded by a closed curve.
    ///
    /// # Errors
    ///
    /// Returns an error if the curve is open, non-planar or degenerate.
    fn create_planar_face(&self, curve: &Self::Curve, tolerance: f64) -> Result<Self::Face>;

    /// Splits a face along chord curves lying in it, reporting the chords
    /// that cut nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the face topology is broken.
    fn split_face(
        &self,
        face: &Self::Face,
        chords: &[Self::Curve],
        tolerance: f64,
    ) -> Result<FaceSplit<Self::Face>>;

    /// Outer boundary of a face as separate edge curves.
    ///
    /// # Errors
    ///
    /// Returns an error if the face topology is broken.
    fn face_boundary_edges(&self, face: &Self::Face) -> Result<Vec<Self::Curve>>;
}
