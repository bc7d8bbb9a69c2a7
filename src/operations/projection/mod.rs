//! Projections of a solid onto the XY plane.
//!
//! Views are additive: they draw new entities in the document and leave the
//! source solid untouched. All projected geometry is computed before the
//! first drawing command is issued.

mod oblique;
mod orthographic;
mod perspective;

pub use oblique::{project_oblique, ObliqueView};
pub use orthographic::{project_orthographic, FrontView};
pub use perspective::{project_point, CentralView};

use tracing::warn;

use crate::document::{Document, FaceHandle, PolylineHandle};
use crate::error::Result;
use crate::geometry::FaceGeometry;
use crate::math::Point3;

/// Output of a view operation.
#[derive(Debug, Clone)]
pub enum ProjectionResult {
    /// A single flattened polyline.
    Silhouette {
        /// Handle of the drawn polyline.
        polyline: PolylineHandle,
        /// Polyline vertices in emission order.
        points: Vec<Point3>,
    },
    /// A set of projected faces, one per source face.
    Faces {
        /// Handles of the drawn faces, in source slot order.
        handles: Vec<FaceHandle>,
        /// Projected face geometry, in source slot order.
        faces: Vec<FaceGeometry>,
    },
}

impl ProjectionResult {
    /// All projected points in emission order.
    #[must_use]
    pub fn points(&self) -> Vec<Point3> {
        match self {
            Self::Silhouette { points, .. } => points.clone(),
            Self::Faces { faces, .. } => faces
                .iter()
                .flat_map(|f| f.corners().iter().copied())
                .collect(),
        }
    }
}

/// Draws projected faces, erasing the ones already drawn if one fails.
fn draw_faces<D: Document + ?Sized>(doc: &mut D, faces: Vec<FaceGeometry>) -> Result<ProjectionResult> {
    let mut handles = Vec::with_capacity(faces.len());
    for face in &faces {
        match doc.create_face(*face.corners()) {
            Ok(handle) => handles.push(handle),
            Err(err) => {
                for handle in handles {
                    if let Err(erase_err) = doc.erase(handle) {
                        warn!(?handle, %erase_err, "could not erase projected face");
                    }
                }
                return Err(err.into());
            }
        }
    }
    Ok(ProjectionResult::Faces { handles, faces })
}
