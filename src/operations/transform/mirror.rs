use tracing::{debug, warn};

use crate::document::{Document, FaceHandle};
use crate::error::Result;
use crate::geometry::{Corners, MirrorPlane};
use crate::math::Point3;
use crate::solid::{SolidModel, FACE_COUNT};

/// Mirrors a solid across a coordinate plane through its base point.
///
/// The document draws a mirrored copy of each face; the originals are then
/// erased and the copies take over their slots.
pub struct Mirror {
    plane: MirrorPlane,
}

impl Mirror {
    /// Creates a new `Mirror` operation.
    #[must_use]
    pub fn new(plane: MirrorPlane) -> Self {
        Self { plane }
    }

    /// Executes the mirror, replacing every face of the solid.
    ///
    /// # Errors
    ///
    /// Returns an error if the document fails to mirror or erase a face. The
    /// copies are erased, originals erased before the failure are redrawn,
    /// and the solid keeps its slots and center.
    pub fn execute<D: Document + ?Sized>(&self, solid: &mut SolidModel, doc: &mut D) -> Result<()> {
        let anchor = solid.base_point();
        let (dir_a, dir_b) = self.plane.directions();
        let originals = *solid.faces();

        let mut saved = [[Point3::origin(); 4]; FACE_COUNT];
        for (slot, &face) in saved.iter_mut().zip(&originals) {
            *slot = doc.corners(face)?;
        }

        let mut mirrored: Vec<FaceHandle> = Vec::with_capacity(FACE_COUNT);
        for &face in &originals {
            match doc.mirror_3d(face, anchor, dir_a, dir_b) {
                Ok(copy) => mirrored.push(copy),
                Err(err) => {
                    erase_copies(doc, &mirrored);
                    return Err(err.into());
                }
            }
        }

        for (i, &face) in originals.iter().enumerate() {
            if let Err(err) = doc.erase(face) {
                erase_copies(doc, &mirrored);
                let restored = restore_originals(doc, &originals, &saved[..i]);
                solid.replace_faces(restored);
                return Err(err.into());
            }
        }

        solid.replace_faces(std::array::from_fn(|i| mirrored[i]));
        solid.set_center(self.plane.reflect(&solid.center()));
        debug!(plane = ?self.plane, center = ?solid.center(), "solid mirrored");
        Ok(())
    }
}

fn erase_copies<D: Document + ?Sized>(doc: &mut D, copies: &[FaceHandle]) {
    for &copy in copies {
        if let Err(erase_err) = doc.erase(copy) {
            warn!(?copy, %erase_err, "could not erase mirrored copy");
        }
    }
}

/// Redraws the leading originals that were already erased and returns the
/// slot array to hand back to the solid.
fn restore_originals<D: Document + ?Sized>(
    doc: &mut D,
    originals: &[FaceHandle; FACE_COUNT],
    erased: &[Corners],
) -> [FaceHandle; FACE_COUNT] {
    let mut faces = *originals;
    for (slot, corners) in faces.iter_mut().zip(erased) {
        match doc.create_face(*corners) {
            Ok(face) => *slot = face,
            Err(err) => warn!(?slot, %err, "could not redraw pre-mirror face"),
        }
    }
    faces
}
