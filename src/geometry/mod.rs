mod cylinder_fit;
mod obb;
mod plane;
mod style;

pub use cylinder_fit::CylinderFit;
pub use obb::OrientedBox;
pub use plane::Plane;
pub use style::{Model, ModelStyle};
