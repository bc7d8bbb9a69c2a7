use tracing::{debug, info, warn};

use crate::document::{Document, FaceHandle};
use crate::error::Result;
use crate::geometry::FaceGeometry;
use crate::solid::{FrustumParams, SolidModel, BASE_FACE, FACE_COUNT, TOP_FACE};

/// Creates a triangular frustum centered on the origin.
pub struct MakeFrustum {
    params: FrustumParams,
}

impl MakeFrustum {
    /// Creates a new `MakeFrustum` operation.
    #[must_use]
    pub fn new(params: FrustumParams) -> Self {
        Self { params }
    }

    /// Face geometry in slot order: base, three laterals, top.
    #[must_use]
    pub fn faces(&self) -> [FaceGeometry; FACE_COUNT] {
        let base = self.params.base_vertices();
        let top = self.params.top_vertices();
        std::array::from_fn(|slot| match slot {
            BASE_FACE => FaceGeometry::triangle(base[0], base[1], base[2]),
            TOP_FACE => FaceGeometry::triangle(top[0], top[1], top[2]),
            _ => {
                let i = slot - 1;
                let j = (i + 1) % 3;
                FaceGeometry::quad(base[i], base[j], top[j], top[i])
            }
        })
    }

    /// Executes the operation, drawing the faces in `doc`.
    ///
    /// # Errors
    ///
    /// Returns an error if the document rejects a command. Faces drawn
    /// before the failure are erased again where the document allows it.
    pub fn execute<D: Document + ?Sized>(&self, doc: &mut D) -> Result<SolidModel> {
        let mut handles: Vec<FaceHandle> = Vec::with_capacity(FACE_COUNT);
        for face in self.faces() {
            match doc.create_face(*face.corners()) {
                Ok(handle) => handles.push(handle),
                Err(err) => {
                    erase_all(doc, handles);
                    return Err(err.into());
                }
            }
        }
        if let Err(err) = doc.refresh_display() {
            erase_all(doc, handles);
            return Err(err.into());
        }

        let faces: [FaceHandle; FACE_COUNT] = std::array::from_fn(|i| handles[i]);
        info!(document = ?doc.id(), params = ?self.params, "frustum initialized");
        debug!(?faces, "frustum face slots");
        Ok(SolidModel::new(doc.id(), faces))
    }
}

fn erase_all<D: Document + ?Sized>(doc: &mut D, handles: Vec<FaceHandle>) {
    for handle in handles {
        if let Err(erase_err) = doc.erase(handle) {
            warn!(?handle, %erase_err, "could not erase partially built frustum face");
        }
    }
}
