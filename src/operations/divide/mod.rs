mod classify;
mod incremental;
#[cfg(test)]
mod test_kernel;
mod topological;
mod validate;

pub use classify::signed_distance;
pub use incremental::IncrementalSplitter;
pub use topological::TopologicalSplitter;
pub use validate::{is_splittable, splittable_boundaries, validate_planar, validate_planes};

use crate::error::Result;
use crate::geometry::Plane;
use crate::kernel::GeometryKernel;

/// Which algorithm divides the boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Peel one region off per plane, in plane order.
    #[default]
    Incremental,
    /// Split a planar face by all chords at once.
    Topological,
}

/// Parameters for dividing a closed boundary with parallel cutting planes,
/// shared by both splitting strategies.
#[derive(Debug, Clone, Copy)]
pub struct SplitParams {
    /// Modelling tolerance for intersections, joins and planarity.
    pub tolerance: f64,
    /// Largest angle (radians) between two normals still treated as parallel.
    pub angle_tolerance: f64,
    /// Algorithm used by [`DivideCurve`] and [`DivideCurves`].
    pub strategy: Strategy,
}

impl Default for SplitParams {
    fn default() -> Self {
        Self {
            tolerance: 1e-3,
            angle_tolerance: 1e-3,
            strategy: Strategy::Incremental,
        }
    }
}

impl SplitParams {
    /// Sets the modelling tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the parallelism tolerance in radians.
    #[must_use]
    pub fn with_angle_tolerance(mut self, angle_tolerance: f64) -> Self {
        self.angle_tolerance = angle_tolerance;
        self
    }

    /// Sets the splitting algorithm.
    #[must_use]
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }
}

/// The closed regions a boundary was divided into.
#[derive(Debug, Clone)]
pub struct Division<C> {
    /// Closed regions, in the order the strategy produced them.
    pub regions: Vec<C>,
    /// Indices of planes that did not cut anything.
    pub skipped_planes: Vec<usize>,
}

/// An algorithm that divides a closed boundary by parallel planes.
pub trait SplitStrategy {
    /// Divides `boundary` into closed regions.
    ///
    /// # Errors
    ///
    /// Returns a [`SplitError`](crate::error::SplitError) for invalid input
    /// or when a cut cannot be closed, and kernel errors as they occur. No
    /// partial result is returned.
    fn divide<K: GeometryKernel>(
        &self,
        kernel: &K,
        boundary: &K::Curve,
        planes: &[Plane],
        params: &SplitParams,
    ) -> Result<Division<K::Curve>>;
}

/// Divides one boundary with a set of planes.
pub struct DivideCurve<'a, C> {
    boundary: &'a C,
    planes: &'a [Plane],
    params: SplitParams,
}

impl<'a, C> DivideCurve<'a, C> {
    /// Creates a new `DivideCurve` operation with default parameters.
    #[must_use]
    pub fn new(boundary: &'a C, planes: &'a [Plane]) -> Self {
        Self {
            boundary,
            planes,
            params: SplitParams::default(),
        }
    }

    #[must_use]
    pub fn with_params(mut self, params: SplitParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the operation with the strategy selected in the parameters.
    ///
    /// # Errors
    ///
    /// See [`SplitStrategy::divide`].
    pub fn execute<K>(&self, kernel: &K) -> Result<Division<C>>
    where
        K: GeometryKernel<Curve = C>,
    {
        match self.params.strategy {
            Strategy::Incremental => {
                IncrementalSplitter.divide(kernel, self.boundary, self.planes, &self.params)
            }
            Strategy::Topological => {
                TopologicalSplitter.divide(kernel, self.boundary, self.planes, &self.params)
            }
        }
    }
}

/// Divides several boundaries with the same planes.
///
/// Each boundary is handled independently, so one failure does not affect
/// the others.
pub struct DivideCurves<'a, C> {
    boundaries: &'a [C],
    planes: &'a [Plane],
    params: SplitParams,
}

impl<'a, C> DivideCurves<'a, C> {
    /// Creates a new `DivideCurves` operation with default parameters.
    #[must_use]
    pub fn new(boundaries: &'a [C], planes: &'a [Plane]) -> Self {
        Self {
            boundaries,
            planes,
            params: SplitParams::default(),
        }
    }

    #[must_use]
    pub fn with_params(mut self, params: SplitParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the operation, returning one result per boundary in input
    /// order.
    pub fn execute<K>(&self, kernel: &K) -> Vec<Result<Division<C>>>
    where
        K: GeometryKernel<Curve = C>,
    {
        self.boundaries
            .iter()
            .map(|boundary| {
                DivideCurve::new(boundary, self.planes)
                    .with_params(self.params)
                    .execute(kernel)
            })
            .collect()
    }
}
