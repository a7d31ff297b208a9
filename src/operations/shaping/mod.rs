mod extrude_polygon;
mod make_hollow_cylinder;

pub use extrude_polygon::{ExtrudeParams, ExtrudePolygon};
pub use make_hollow_cylinder::{HollowCylinderParams, MakeHollowCylinder};
