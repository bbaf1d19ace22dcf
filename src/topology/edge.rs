use crate::error::Result;
use crate::geometry::{Curve, Line};
use crate::math::Point3;

use super::vertex::VertexId;

slotmap::new_key_type! {
    /// Unique identifier for an edge in the topology store.
    pub struct EdgeId;
}

/// The geometric curve carried by an edge.
///
/// Faces built from polyline boundaries only ever carry straight edges.
#[derive(Debug, Clone)]
pub enum EdgeCurve {
    /// A straight segment.
    Line(Line),
}

/// Data associated with a topological edge.
///
/// An edge connects two vertices and carries the curve between them,
/// trimmed to `[t_start, t_end]`.
#[derive(Debug, Clone)]
pub struct EdgeData {
    /// Start vertex of the edge.
    pub start: VertexId,
    /// End vertex of the edge.
    pub end: VertexId,
    /// The geometric curve defining this edge's shape.
    pub curve: EdgeCurve,
    /// Parameter on the curve corresponding to the start vertex.
    pub t_start: f64,
    /// Parameter on the curve corresponding to the end vertex.
    pub t_end: f64,
}

impl EdgeData {
    /// Endpoints of the trimmed curve in the edge's natural direction.
    ///
    /// # Errors
    ///
    /// Returns an error if the trim parameters fall outside the curve.
    pub fn endpoints(&self) -> Result<(Point3, Point3)> {
        match &self.curve {
            EdgeCurve::Line(line) => Ok((line.evaluate(self.t_start)?, line.evaluate(self.t_end)?)),
        }
    }
}
