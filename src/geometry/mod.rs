pub mod axis;
pub mod face;
pub mod plane;

pub use axis::Axis;
pub use face::{Corners, FaceGeometry};
pub use plane::MirrorPlane;
