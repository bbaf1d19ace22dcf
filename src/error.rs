use thiserror::Error;

/// Top-level error type for boundary splitting.
#[derive(Debug, Error)]
pub enum SplitCurvesError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Tessellation(#[from] TessellationError),

    #[error(transparent)]
    Split(#[from] SplitError),
}

impl SplitCurvesError {
    /// Returns the splitting error, if this is one.
    #[must_use]
    pub fn as_split(&self) -> Option<&SplitError> {
        match self {
            Self::Split(err) => Some(err),
            _ => None,
        }
    }
}

/// Errors raised by geometric primitives.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,

    #[error("curve is not closed")]
    NotClosed,

    #[error("curve is not planar (deviation {deviation})")]
    NonPlanar { deviation: f64 },
}

/// Errors raised while building or walking topology.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    #[error("wire is not closed")]
    WireNotClosed,
}

/// Errors related to curve tessellation.
#[derive(Debug, Error)]
pub enum TessellationError {
    #[error("invalid tessellation parameters: {0}")]
    InvalidParameters(String),
}

/// Errors raised by the splitting strategies.
///
/// Validation variants are reported before any geometry is produced; the
/// join variants abort the whole call and no partial regions are returned.
#[derive(Debug, Error)]
pub enum SplitError {
    #[error("no planes supplied to split the boundary")]
    EmptyInput,

    #[error("plane {index} is not parallel to plane 0")]
    NonParallelPlanes { index: usize },

    #[error("boundary curve is not closed")]
    OpenBoundary,

    #[error("boundary curve is not planar")]
    NonPlanarBoundary,

    #[error("none of the planes intersect the boundary")]
    NoIntersectingPlanes,

    #[error("chord and arc at plane {plane_index} joined into {pieces} curves instead of one closed curve")]
    JoinFailure { plane_index: usize, pieces: usize },

    #[error("edges of sub-face {face_index} joined into {pieces} curves instead of one closed curve")]
    FaceJoinFailure { face_index: usize, pieces: usize },

    #[error("invalid split parameters: {0}")]
    InvalidParameters(String),
}

/// Convenience type alias for results using [`SplitCurvesError`].
pub type Result<T> = std::result::Result<T, SplitCurvesError>;
