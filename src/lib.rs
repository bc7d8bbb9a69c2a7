pub mod document;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod session;
pub mod solid;

pub use document::{Document, DocumentId, FaceHandle, MemoryDocument, PolylineHandle};
pub use error::{FrustraError, Result};
pub use geometry::{Axis, MirrorPlane};
pub use operations::projection::ProjectionResult;
pub use session::Session;
pub use solid::{FrustumParams, SolidModel};
