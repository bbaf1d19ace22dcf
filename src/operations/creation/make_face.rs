use crate::error::{Result, TopologyError};
use crate::geometry::Plane;
use crate::topology::{FaceData, FaceId, TopologyStore, WireId};

/// Creates a planar face bounded by a closed wire.
pub struct MakeFace {
    outer_wire: WireId,
    surface: Plane,
}

impl MakeFace {
    /// Creates a new `MakeFace` operation.
    #[must_use]
    pub fn new(outer_wire: WireId, surface: Plane) -> Self {
        Self {
            outer_wire,
            surface,
        }
    }

    /// Executes the operation, creating the face in the topology store.
    ///
    /// # Errors
    ///
    /// Returns an error if the wire is missing or open.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<FaceId> {
        if !store.wire(self.outer_wire)?.is_closed {
            return Err(TopologyError::WireNotClosed.into());
        }
        Ok(store.add_face(FaceData {
            surface: self.surface.clone(),
            outer_wire: self.outer_wire,
        }))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use crate::operations::creation::MakeWire;

    fn p(x: f64, y: f64) -> Point3 {
        Point3::new(x, y, 0.0)
    }

    #[test]
    fn face_on_closed_wire() {
        let mut store = TopologyStore::new();
        let wire = MakeWire::new(vec![p(0.0, 0.0), p(4.0, 0.0), p(4.0, 4.0), p(0.0, 4.0)], true)
            .execute(&mut store)
            .unwrap();
        let face = MakeFace::new(wire, Plane::world_xy())
            .execute(&mut store)
            .unwrap();
        assert_eq!(store.face_loop(face).unwrap().len(), 4);
    }

    #[test]
    fn open_wire_is_rejected() {
        let mut store = TopologyStore::new();
        let wire = MakeWire::new(vec![p(0.0, 0.0), p(4.0, 0.0), p(4.0, 4.0)], false)
            .execute(&mut store)
            .unwrap();
        let result = MakeFace::new(wire, Plane::world_xy()).execute(&mut store);
        assert!(matches!(
            result,
            Err(crate::error::SplitCurvesError::Topology(TopologyError::WireNotClosed))
        ));
    }
}
