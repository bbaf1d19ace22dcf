mod make_ellipse;
mod make_face;
mod make_polygon;
mod make_rectangle;
mod make_wire;

pub use make_ellipse::{MakeCircle, MakeEllipse};
pub use make_face::MakeFace;
pub use make_polygon::MakePolygon;
pub use make_rectangle::MakeRectangle;
pub use make_wire::MakeWire;
