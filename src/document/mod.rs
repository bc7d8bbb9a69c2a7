//! The drawing document the kernel issues commands to.
//!
//! The kernel never inspects a document's internal representation. It holds
//! opaque handles and drives the document through the [`Document`] trait.

mod memory;

pub use memory::MemoryDocument;

use crate::error::DocumentError;
use crate::geometry::Corners;
use crate::math::{Point3, Vector3};

slotmap::new_key_type! {
    /// Opaque handle to a face drawn in a document.
    pub struct FaceHandle;

    /// Opaque handle to a polyline drawn in a document.
    pub struct PolylineHandle;
}

/// Identity of a drawing document.
///
/// A solid belongs to exactly one document; switching documents rebuilds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(pub u64);

/// Command set of an external drawing surface.
///
/// Every command may fail with [`DocumentError::Unavailable`] if the
/// surface cannot be reached.
pub trait Document {
    /// Identity of the document currently receiving commands.
    fn id(&self) -> DocumentId;

    /// Verifies that the document can accept commands.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Unavailable`] if it cannot.
    fn check_available(&self) -> Result<(), DocumentError>;

    /// Draws a new face from four corners.
    ///
    /// # Errors
    ///
    /// Returns an error if the document rejects the command.
    fn create_face(&mut self, corners: Corners) -> Result<FaceHandle, DocumentError>;

    /// Removes a face from the document.
    ///
    /// # Errors
    ///
    /// Returns an error if the handle is unknown.
    fn erase(&mut self, face: FaceHandle) -> Result<(), DocumentError>;

    /// Moves a face by the displacement that carries `from` onto `to`.
    ///
    /// # Errors
    ///
    /// Returns an error if the handle is unknown.
    fn translate_in_place(
        &mut self,
        face: FaceHandle,
        from: Point3,
        to: Point3,
    ) -> Result<(), DocumentError>;

    /// Draws a mirrored copy of a face across the plane through `anchor`
    /// spanned by `dir_a` and `dir_b`. The original face is left in place.
    ///
    /// # Errors
    ///
    /// Returns an error if the handle is unknown or the plane is degenerate.
    fn mirror_3d(
        &mut self,
        face: FaceHandle,
        anchor: Point3,
        dir_a: Vector3,
        dir_b: Vector3,
    ) -> Result<FaceHandle, DocumentError>;

    /// Scales a face uniformly about `pivot`.
    ///
    /// # Errors
    ///
    /// Returns an error if the handle is unknown.
    fn scale_in_place(
        &mut self,
        face: FaceHandle,
        pivot: Point3,
        factor: f64,
    ) -> Result<(), DocumentError>;

    /// Rotates a face about the line through `anchor` along `axis`.
    ///
    /// # Errors
    ///
    /// Returns an error if the handle is unknown or the axis is zero-length.
    fn rotate_3d_in_place(
        &mut self,
        face: FaceHandle,
        anchor: Point3,
        axis: Vector3,
        angle: f64,
    ) -> Result<(), DocumentError>;

    /// Reads back the four corners of a face in winding order.
    ///
    /// # Errors
    ///
    /// Returns an error if the handle is unknown.
    fn corners(&self, face: FaceHandle) -> Result<Corners, DocumentError>;

    /// Draws a polyline through `points`.
    ///
    /// # Errors
    ///
    /// Returns an error if the document rejects the command.
    fn create_polyline(&mut self, points: &[Point3]) -> Result<PolylineHandle, DocumentError>;

    /// Asks the document to redraw.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is unavailable.
    fn refresh_display(&mut self) -> Result<(), DocumentError>;
}
