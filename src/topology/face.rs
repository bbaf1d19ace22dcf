use crate::geometry::Plane;

use super::wire::WireId;

slotmap::new_key_type! {
    /// Unique identifier for a face in the topology store.
    pub struct FaceId;
}

/// A bounded planar region.
///
/// Boundaries handled here are single simple loops, so a face has exactly
/// one closed outer wire and no holes.
#[derive(Debug, Clone)]
pub struct FaceData {
    /// The plane the face lies on.
    pub surface: Plane,
    /// The closed boundary wire.
    pub outer_wire: WireId,
}
