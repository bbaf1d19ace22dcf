mod area;
mod bounding_box;
mod planarity;

pub use area::Area;
pub use bounding_box::{Aabb, BoundingBox};
pub use planarity::Planarity;
