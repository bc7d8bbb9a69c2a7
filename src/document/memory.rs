use slotmap::SlotMap;
use tracing::trace;

use crate::error::DocumentError;
use crate::geometry::{Corners, FaceGeometry};
use crate::math::{Point3, Vector3};

use super::{Document, DocumentId, FaceHandle, PolylineHandle};

/// In-memory drawing document.
///
/// Faces and polylines live in generational arenas, so erased handles are
/// never reused and stale handles are reported instead of aliasing.
#[derive(Debug)]
pub struct MemoryDocument {
    id: DocumentId,
    faces: SlotMap<FaceHandle, FaceGeometry>,
    polylines: SlotMap<PolylineHandle, Vec<Point3>>,
    available: bool,
    /// Remaining commands before a simulated outage.
    budget: Option<usize>,
    refreshes: usize,
}

impl MemoryDocument {
    /// Creates a new, empty document.
    #[must_use]
    pub fn new(id: DocumentId) -> Self {
        Self {
            id,
            faces: SlotMap::with_key(),
            polylines: SlotMap::with_key(),
            available: true,
            budget: None,
            refreshes: 0,
        }
    }

    /// Marks the document reachable or unreachable.
    pub fn set_available(&mut self, available: bool) {
        self.available = available;
        if available {
            self.budget = None;
        }
    }

    /// Lets `commands` more drawing commands succeed, then fails the next
    /// one with [`DocumentError::Unavailable`]. Later commands succeed again.
    pub fn interrupt_after(&mut self, commands: usize) {
        self.budget = Some(commands);
    }

    /// Number of faces currently drawn.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Number of polylines currently drawn.
    #[must_use]
    pub fn polyline_count(&self) -> usize {
        self.polylines.len()
    }

    /// Returns `true` if the handle refers to a live face.
    #[must_use]
    pub fn contains_face(&self, face: FaceHandle) -> bool {
        self.faces.contains_key(face)
    }

    /// Returns the points of a polyline.
    #[must_use]
    pub fn polyline(&self, polyline: PolylineHandle) -> Option<&[Point3]> {
        self.polylines.get(polyline).map(Vec::as_slice)
    }

    /// Number of display refreshes requested so far.
    #[must_use]
    pub fn refresh_count(&self) -> usize {
        self.refreshes
    }

    fn begin_command(&mut self) -> Result<(), DocumentError> {
        self.check_available()?;
        match self.budget {
            Some(0) => {
                self.budget = None;
                Err(DocumentError::Unavailable)
            }
            Some(n) => {
                self.budget = Some(n - 1);
                Ok(())
            }
            None => Ok(()),
        }
    }

    fn face_mut(&mut self, face: FaceHandle) -> Result<&mut FaceGeometry, DocumentError> {
        self.faces
            .get_mut(face)
            .ok_or(DocumentError::UnknownHandle("face"))
    }
}

impl Document for MemoryDocument {
    fn id(&self) -> DocumentId {
        self.id
    }

    fn check_available(&self) -> Result<(), DocumentError> {
        if self.available {
            Ok(())
        } else {
            Err(DocumentError::Unavailable)
        }
    }

    fn create_face(&mut self, corners: Corners) -> Result<FaceHandle, DocumentError> {
        self.begin_command()?;
        let handle = self.faces.insert(FaceGeometry::new(corners));
        trace!(?handle, "face created");
        Ok(handle)
    }

    fn erase(&mut self, face: FaceHandle) -> Result<(), DocumentError> {
        self.begin_command()?;
        self.faces
            .remove(face)
            .map(|_| ())
            .ok_or(DocumentError::UnknownHandle("face"))
    }

    fn translate_in_place(
        &mut self,
        face: FaceHandle,
        from: Point3,
        to: Point3,
    ) -> Result<(), DocumentError> {
        self.begin_command()?;
        let geometry = self.face_mut(face)?;
        *geometry = geometry.translated(&(to - from));
        Ok(())
    }

    fn mirror_3d(
        &mut self,
        face: FaceHandle,
        anchor: Point3,
        dir_a: Vector3,
        dir_b: Vector3,
    ) -> Result<FaceHandle, DocumentError> {
        self.begin_command()?;
        let source = self
            .faces
            .get(face)
            .ok_or(DocumentError::UnknownHandle("face"))?;
        let mirrored = source
            .mirrored(&anchor, &dir_a, &dir_b)
            .map_err(|e| DocumentError::Degenerate(e.to_string()))?;
        Ok(self.faces.insert(mirrored))
    }

    fn scale_in_place(
        &mut self,
        face: FaceHandle,
        pivot: Point3,
        factor: f64,
    ) -> Result<(), DocumentError> {
        self.begin_command()?;
        let geometry = self.face_mut(face)?;
        *geometry = geometry.scaled(&pivot, factor);
        Ok(())
    }

    fn rotate_3d_in_place(
        &mut self,
        face: FaceHandle,
        anchor: Point3,
        axis: Vector3,
        angle: f64,
    ) -> Result<(), DocumentError> {
        self.begin_command()?;
        let geometry = self.face_mut(face)?;
        *geometry = geometry
            .rotated(&anchor, &axis, angle)
            .map_err(|e| DocumentError::Degenerate(e.to_string()))?;
        Ok(())
    }

    fn corners(&self, face: FaceHandle) -> Result<Corners, DocumentError> {
        self.check_available()?;
        self.faces
            .get(face)
            .map(|f| *f.corners())
            .ok_or(DocumentError::UnknownHandle("face"))
    }

    fn create_polyline(&mut self, points: &[Point3]) -> Result<PolylineHandle, DocumentError> {
        self.begin_command()?;
        if points.len() < 2 {
            return Err(DocumentError::Degenerate(
                "polyline needs at least two points".into(),
            ));
        }
        Ok(self.polylines.insert(points.to_vec()))
    }

    fn refresh_display(&mut self) -> Result<(), DocumentError> {
        self.begin_command()?;
        self.refreshes += 1;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn unit_triangle() -> Corners {
        *FaceGeometry::triangle(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0)).corners()
    }

    #[test]
    fn create_and_read_back() {
        let mut doc = MemoryDocument::new(DocumentId(1));
        let f = doc.create_face(unit_triangle()).unwrap();
        assert_eq!(doc.corners(f).unwrap(), unit_triangle());
        assert_eq!(doc.face_count(), 1);
    }

    #[test]
    fn erased_handle_is_stale() {
        let mut doc = MemoryDocument::new(DocumentId(1));
        let f = doc.create_face(unit_triangle()).unwrap();
        doc.erase(f).unwrap();
        assert!(!doc.contains_face(f));
        assert!(matches!(
            doc.corners(f),
            Err(DocumentError::UnknownHandle("face"))
        ));
        let g = doc.create_face(unit_triangle()).unwrap();
        assert_ne!(f, g);
    }

    #[test]
    fn mirror_creates_new_face_and_keeps_original() {
        let mut doc = MemoryDocument::new(DocumentId(1));
        let f = doc
            .create_face([p(0.0, 0.0, 2.0), p(1.0, 0.0, 2.0), p(0.0, 1.0, 2.0), p(0.0, 0.0, 2.0)])
            .unwrap();
        let m = doc
            .mirror_3d(f, Point3::origin(), Vector3::x(), Vector3::y())
            .unwrap();
        assert_ne!(f, m);
        assert_eq!(doc.face_count(), 2);
        assert_abs_diff_eq!(doc.corners(m).unwrap()[1], p(1.0, 0.0, -2.0));
        assert_abs_diff_eq!(doc.corners(f).unwrap()[1], p(1.0, 0.0, 2.0));
    }

    #[test]
    fn translate_carries_from_onto_to() {
        let mut doc = MemoryDocument::new(DocumentId(1));
        let f = doc.create_face(unit_triangle()).unwrap();
        doc.translate_in_place(f, p(1.0, 1.0, 1.0), p(2.0, 3.0, 4.0))
            .unwrap();
        assert_abs_diff_eq!(doc.corners(f).unwrap()[0], p(1.0, 2.0, 3.0));
    }

    #[test]
    fn zero_rotation_axis_is_degenerate() {
        let mut doc = MemoryDocument::new(DocumentId(1));
        let f = doc.create_face(unit_triangle()).unwrap();
        let err = doc
            .rotate_3d_in_place(f, Point3::origin(), Vector3::zeros(), 1.0)
            .unwrap_err();
        assert!(matches!(err, DocumentError::Degenerate(_)));
    }

    #[test]
    fn unavailable_document_rejects_commands() {
        let mut doc = MemoryDocument::new(DocumentId(1));
        doc.set_available(false);
        assert!(matches!(
            doc.create_face(unit_triangle()),
            Err(DocumentError::Unavailable)
        ));
        assert!(doc.refresh_display().is_err());
    }

    #[test]
    fn interrupt_after_budget() {
        let mut doc = MemoryDocument::new(DocumentId(1));
        doc.interrupt_after(2);
        doc.create_face(unit_triangle()).unwrap();
        doc.create_face(unit_triangle()).unwrap();
        assert!(matches!(
            doc.create_face(unit_triangle()),
            Err(DocumentError::Unavailable)
        ));
        assert!(doc.create_face(unit_triangle()).is_ok());
        assert_eq!(doc.face_count(), 3);
    }

    #[test]
    fn short_polyline_is_rejected() {
        let mut doc = MemoryDocument::new(DocumentId(1));
        assert!(doc.create_polyline(&[p(0.0, 0.0, 0.0)]).is_err());
        let h = doc
            .create_polyline(&[p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0)])
            .unwrap();
        assert_eq!(doc.polyline(h).unwrap().len(), 2);
    }
}
