mod mirror;
mod rotate;
mod scale;
mod translate;

pub use mirror::Mirror;
pub use rotate::Rotate;
pub use scale::Scale;
pub use translate::Translate;

use tracing::{trace, warn};

use crate::document::{Document, FaceHandle};
use crate::error::{DocumentError, Result};

/// Runs an in-place command on every face, undoing the faces already
/// transformed if one of them fails.
fn apply_in_place<D, F, U>(faces: &[FaceHandle], doc: &mut D, mut apply: F, mut undo: U) -> Result<()>
where
    D: Document + ?Sized,
    F: FnMut(&mut D, FaceHandle) -> std::result::Result<(), DocumentError>,
    U: FnMut(&mut D, FaceHandle) -> std::result::Result<(), DocumentError>,
{
    for (i, &face) in faces.iter().enumerate() {
        trace!(?face, "transforming face");
        if let Err(err) = apply(doc, face) {
            for &done in faces[..i].iter().rev() {
                if let Err(undo_err) = undo(doc, done) {
                    warn!(?done, %undo_err, "could not undo face transform");
                }
            }
            return Err(err.into());
        }
    }
    Ok(())
}
