use tracing::debug;

use crate::document::Document;
use crate::error::Result;
use crate::math::Point3;
use crate::solid::SolidModel;

use super::ProjectionResult;

/// Drops the z coordinate of a point.
#[must_use]
pub fn project_orthographic(point: &Point3) -> Point3 {
    Point3::new(point.x, point.y, 0.0)
}

/// Orthographic front view on the XY plane.
///
/// Emits the first three corners of every face, in slot and winding order,
/// as one polyline of `3 * faces` points.
#[derive(Debug, Default)]
pub struct FrontView;

impl FrontView {
    /// Number of corners each face contributes to the silhouette.
    pub const CORNERS_PER_FACE: usize = 3;

    /// Creates a new `FrontView` operation.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the projection, drawing the silhouette polyline.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot report a face or rejects
    /// the polyline.
    pub fn execute<D: Document + ?Sized>(
        &self,
        solid: &SolidModel,
        doc: &mut D,
    ) -> Result<ProjectionResult> {
        let mut points = Vec::with_capacity(solid.faces().len() * Self::CORNERS_PER_FACE);
        for face in solid.face_geometry(&*doc)? {
            points.extend(
                face.corners()
                    .iter()
                    .take(Self::CORNERS_PER_FACE)
                    .map(project_orthographic),
            );
        }

        let polyline = doc.create_polyline(&points)?;
        debug!(?polyline, points = points.len(), "front view drawn");
        Ok(ProjectionResult::Silhouette { polyline, points })
    }
}
