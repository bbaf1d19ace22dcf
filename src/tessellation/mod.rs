mod tessellate_curve;

pub use tessellate_curve::TessellateCurve;

/// Parameters controlling how analytic curves are flattened into polylines.
#[derive(Debug, Clone, Copy)]
pub struct TessellationParams {
    /// Maximum allowed deviation between the curve and its polyline.
    pub tolerance: f64,
    /// Number of uniform segments to start refining from.
    pub min_segments: usize,
    /// Upper bound on the number of segments.
    pub max_segments: usize,
}

impl Default for TessellationParams {
    fn default() -> Self {
        Self {
            tolerance: 0.01,
            min_segments: 4,
            max_segments: 1024,
        }
    }
}

impl TessellationParams {
    /// Sets the maximum chord deviation.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }
}
