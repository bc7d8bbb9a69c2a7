use tracing::debug;

use crate::document::Document;
use crate::error::Result;
use crate::math::{Point3, Vector3};
use crate::solid::SolidModel;

use super::apply_in_place;

/// Translates a solid by a displacement vector.
pub struct Translate {
    displacement: Vector3,
}

impl Translate {
    /// Creates a new `Translate` operation.
    #[must_use]
    pub fn new(displacement: Vector3) -> Self {
        Self { displacement }
    }

    /// Executes the translation, moving every face in place.
    ///
    /// # Errors
    ///
    /// Returns an error if the document rejects a command.
    pub fn execute<D: Document + ?Sized>(&self, solid: &mut SolidModel, doc: &mut D) -> Result<()> {
        let origin = Point3::origin();
        let forward = origin + self.displacement;
        let backward = origin - self.displacement;
        apply_in_place(
            solid.faces(),
            doc,
            |doc, face| doc.translate_in_place(face, origin, forward),
            |doc, face| doc.translate_in_place(face, origin, backward),
        )?;

        solid.set_center(solid.center() + self.displacement);
        debug!(displacement = ?self.displacement, center = ?solid.center(), "solid translated");
        Ok(())
    }
}
