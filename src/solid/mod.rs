mod params;

pub use params::FrustumParams;

use crate::document::{Document, DocumentId, FaceHandle};
use crate::error::Result;
use crate::geometry::{Axis, FaceGeometry, MirrorPlane};
use crate::math::{Point3, Vector3};
use crate::operations::creation::MakeFrustum;
use crate::operations::projection::{CentralView, FrontView, ObliqueView, ProjectionResult};
use crate::operations::transform::{Mirror, Rotate, Scale, Translate};

/// Number of faces of a triangular frustum.
pub const FACE_COUNT: usize = 5;

/// Slot of the base face.
pub const BASE_FACE: usize = 0;

/// Slot of the top face.
pub const TOP_FACE: usize = 4;

/// A triangular frustum drawn in a document.
///
/// Face slots are fixed: base, three laterals, top. Transforms replace or
/// move the faces in their slots and never change the slot count.
///
/// `center` is tracked by arithmetic on every transform rather than read
/// back from the faces, so it follows the construction origin of the solid.
#[derive(Debug, Clone)]
pub struct SolidModel {
    document: DocumentId,
    center: Point3,
    base_point: Point3,
    faces: [FaceHandle; FACE_COUNT],
}

impl SolidModel {
    pub(crate) fn new(document: DocumentId, faces: [FaceHandle; FACE_COUNT]) -> Self {
        Self {
            document,
            center: Point3::origin(),
            base_point: Point3::origin(),
            faces,
        }
    }

    /// Builds a frustum in `doc` and returns its model.
    ///
    /// # Errors
    ///
    /// Returns an error if the document rejects any command; in that case
    /// no faces are left behind.
    pub fn initialize<D: Document + ?Sized>(doc: &mut D, params: &FrustumParams) -> Result<Self> {
        MakeFrustum::new(*params).execute(doc)
    }

    /// Document the faces live in.
    #[must_use]
    pub fn document(&self) -> DocumentId {
        self.document
    }

    /// Running center of the solid.
    #[must_use]
    pub fn center(&self) -> Point3 {
        self.center
    }

    /// Pivot of mirror and rotate commands.
    #[must_use]
    pub fn base_point(&self) -> Point3 {
        self.base_point
    }

    /// Face handles in slot order.
    #[must_use]
    pub fn faces(&self) -> &[FaceHandle; FACE_COUNT] {
        &self.faces
    }

    pub(crate) fn set_center(&mut self, center: Point3) {
        self.center = center;
    }

    pub(crate) fn replace_faces(&mut self, faces: [FaceHandle; FACE_COUNT]) {
        self.faces = faces;
    }

    /// Reads the current geometry of every face, in slot order.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot report a face.
    pub fn face_geometry<D: Document + ?Sized>(&self, doc: &D) -> Result<Vec<FaceGeometry>> {
        self.faces
            .iter()
            .map(|&f| -> Result<FaceGeometry> { Ok(FaceGeometry::new(doc.corners(f)?)) })
            .collect()
    }

    /// Distinct vertices of every face, in slot and winding order.
    ///
    /// Shared vertices appear once per face that uses them.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot report a face.
    pub fn vertices<D: Document + ?Sized>(&self, doc: &D) -> Result<Vec<Point3>> {
        let faces = self.face_geometry(doc)?;
        Ok(faces
            .iter()
            .flat_map(|f| f.distinct_corners().iter().copied())
            .collect())
    }

    /// Translates the solid by `(dx, dy, dz)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the document rejects the command.
    pub fn move_by<D: Document + ?Sized>(
        &mut self,
        doc: &mut D,
        dx: f64,
        dy: f64,
        dz: f64,
    ) -> Result<()> {
        Translate::new(Vector3::new(dx, dy, dz)).execute(self, doc)
    }

    /// Reflects the solid across a coordinate plane through the origin.
    ///
    /// # Errors
    ///
    /// Returns an error if the document rejects the command.
    pub fn mirror<D: Document + ?Sized>(&mut self, doc: &mut D, plane: MirrorPlane) -> Result<()> {
        Mirror::new(plane).execute(self, doc)
    }

    /// Scales the solid uniformly about its center.
    ///
    /// # Errors
    ///
    /// Returns an error if the document rejects the command.
    pub fn scale<D: Document + ?Sized>(&mut self, doc: &mut D, factor: f64) -> Result<()> {
        Scale::new(factor).execute(self, doc)
    }

    /// Rotates the solid about a coordinate axis by `angle` radians.
    ///
    /// # Errors
    ///
    /// Returns an error if the document rejects the command.
    pub fn rotate<D: Document + ?Sized>(&mut self, doc: &mut D, axis: Axis, angle: f64) -> Result<()> {
        Rotate::new(axis, angle).execute(self, doc)
    }

    /// Draws the orthographic XY silhouette.
    ///
    /// # Errors
    ///
    /// Returns an error if the document rejects the command.
    pub fn front_view<D: Document + ?Sized>(&self, doc: &mut D) -> Result<ProjectionResult> {
        FrontView::new().execute(self, doc)
    }

    /// Draws the perspective projection from `(cx, cy, cz)` onto `z = 0`.
    ///
    /// # Errors
    ///
    /// Returns a geometry error if a vertex is coplanar with the viewpoint.
    pub fn central_view<D: Document + ?Sized>(
        &self,
        doc: &mut D,
        cx: f64,
        cy: f64,
        cz: f64,
    ) -> Result<ProjectionResult> {
        CentralView::new(Point3::new(cx, cy, cz)).execute(self, doc)
    }

    /// Draws the cavalier oblique projection at `angle_deg` degrees.
    ///
    /// # Errors
    ///
    /// Returns an error if the document rejects the command.
    pub fn oblique_view<D: Document + ?Sized>(
        &self,
        doc: &mut D,
        angle_deg: f64,
    ) -> Result<ProjectionResult> {
        ObliqueView::new(angle_deg).execute(self, doc)
    }
}
