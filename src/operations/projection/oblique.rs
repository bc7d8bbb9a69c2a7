use tracing::debug;

use crate::document::Document;
use crate::error::{OperationError, Result};
use crate::math::Point3;
use crate::solid::SolidModel;

use super::{draw_faces, ProjectionResult};

/// Shears depth into the XY plane at `angle_deg` degrees.
///
/// `x' = x + scale * z * cos(angle)`, `y' = y + scale * z * sin(angle)`.
#[must_use]
pub fn project_oblique(point: &Point3, angle_deg: f64, scale: f64) -> Point3 {
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    Point3::new(
        point.x + scale * point.z * cos,
        point.y + scale * point.z * sin,
        0.0,
    )
}

/// Oblique projection of a solid.
///
/// The default depth scale of 1 gives a cavalier projection; 0.5 gives a
/// cabinet projection.
#[derive(Debug)]
pub struct ObliqueView {
    angle_deg: f64,
    scale: f64,
}

impl ObliqueView {
    /// Creates a new cavalier `ObliqueView`.
    #[must_use]
    pub fn new(angle_deg: f64) -> Self {
        Self {
            angle_deg,
            scale: 1.0,
        }
    }

    /// Sets the depth foreshortening factor.
    ///
    /// # Errors
    ///
    /// Returns an error if `scale` is not finite.
    pub fn with_scale(mut self, scale: f64) -> Result<Self> {
        if !scale.is_finite() {
            return Err(
                OperationError::InvalidInput("oblique scale must be finite".into()).into(),
            );
        }
        self.scale = scale;
        Ok(self)
    }

    /// Executes the projection, drawing one face per source face.
    ///
    /// # Errors
    ///
    /// Returns an error if the document rejects a command.
    pub fn execute<D: Document + ?Sized>(
        &self,
        solid: &SolidModel,
        doc: &mut D,
    ) -> Result<ProjectionResult> {
        let faces = solid
            .face_geometry(&*doc)?
            .iter()
            .map(|face| face.map(|p| project_oblique(p, self.angle_deg, self.scale)))
            .collect();

        let result = draw_faces(doc, faces)?;
        debug!(angle_deg = self.angle_deg, scale = self.scale, "oblique view drawn");
        Ok(result)
    }
}
