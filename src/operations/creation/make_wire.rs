use crate::error::{GeometryError, Result};
use crate::geometry::Line;
use crate::math::Point3;
use crate::topology::{EdgeCurve, EdgeData, OrientedEdge, TopologyStore, VertexData, WireData, WireId};

/// Creates a wire of straight edges through a sequence of 3D points.
///
/// Consecutive points share a vertex. When `close` is set, a final edge
/// runs from the last point back to the first vertex.
pub struct MakeWire {
    points: Vec<Point3>,
    close: bool,
}

impl MakeWire {
    /// Creates a new `MakeWire` operation.
    #[must_use]
    pub fn new(points: Vec<Point3>, close: bool) -> Self {
        Self { points, close }
    }

    /// Executes the operation, creating the wire in the topology store.
    ///
    /// # Errors
    ///
    /// Returns an error if there are too few points or two consecutive
    /// points coincide.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<WireId> {
        let required = if self.close { 3 } else { 2 };
        if self.points.len() < required {
            return Err(GeometryError::Degenerate(format!(
                "wire needs at least {required} points, got {}",
                self.points.len()
            ))
            .into());
        }

        let vertices: Vec<_> = self
            .points
            .iter()
            .map(|p| store.add_vertex(VertexData::new(*p)))
            .collect();

        let edge_count = if self.close {
            vertices.len()
        } else {
            vertices.len() - 1
        };
        let mut edges = Vec::with_capacity(edge_count);
        for i in 0..edge_count {
            let j = (i + 1) % vertices.len();
            let line = Line::between(self.points[i], self.points[j])?;
            let t_end = line.length();
            let edge = store.add_edge(EdgeData {
                start: vertices[i],
                end: vertices[j],
                curve: EdgeCurve::Line(line),
                t_start: 0.0,
                t_end,
            });
            edges.push(OrientedEdge::new(edge, true));
        }

        Ok(store.add_wire(WireData {
            edges,
            is_closed: self.close,
        }))
    }
}
