use tracing::debug;

use crate::document::Document;
use crate::error::Result;
use crate::geometry::Axis;
use crate::math::matrix::transform_row;
use crate::solid::SolidModel;

use super::apply_in_place;

/// Rotates a solid about a coordinate axis through its base point.
///
/// The faces are rotated by the document; the center is updated separately
/// by multiplying its row vector with the axis rotation matrix.
pub struct Rotate {
    axis: Axis,
    angle: f64,
}

impl Rotate {
    /// Creates a new `Rotate` operation.
    ///
    /// * `angle` - Rotation angle in radians.
    #[must_use]
    pub fn new(axis: Axis, angle: f64) -> Self {
        Self { axis, angle }
    }

    /// Executes the rotation, modifying every face in place.
    ///
    /// # Errors
    ///
    /// Returns an error if the document rejects a command.
    pub fn execute<D: Document + ?Sized>(&self, solid: &mut SolidModel, doc: &mut D) -> Result<()> {
        let center = transform_row(&solid.center(), &self.axis.rotation_matrix(self.angle))?;

        let anchor = solid.base_point();
        let direction = self.axis.direction();
        let angle = self.angle;
        apply_in_place(
            solid.faces(),
            doc,
            |doc, face| doc.rotate_3d_in_place(face, anchor, direction, angle),
            |doc, face| doc.rotate_3d_in_place(face, anchor, direction, -angle),
        )?;

        solid.set_center(center);
        debug!(axis = ?self.axis, angle, ?center, "solid rotated");
        Ok(())
    }
}
