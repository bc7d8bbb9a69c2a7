use tracing::debug;

use crate::document::Document;
use crate::error::Result;
use crate::solid::SolidModel;

use super::apply_in_place;

/// Scales a solid uniformly about its center.
///
/// The factor is not validated; callers are expected to reject
/// non-positive values.
pub struct Scale {
    factor: f64,
}

impl Scale {
    /// Creates a new `Scale` operation.
    #[must_use]
    pub fn new(factor: f64) -> Self {
        Self { factor }
    }

    /// Executes the scaling, modifying every face in place.
    ///
    /// # Errors
    ///
    /// Returns an error if the document rejects a command.
    pub fn execute<D: Document + ?Sized>(&self, solid: &mut SolidModel, doc: &mut D) -> Result<()> {
        let pivot = solid.center();
        let factor = self.factor;
        apply_in_place(
            solid.faces(),
            doc,
            |doc, face| doc.scale_in_place(face, pivot, factor),
            |doc, face| doc.scale_in_place(face, pivot, factor.recip()),
        )?;

        debug!(factor, ?pivot, "solid scaled");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::document::{DocumentId, MemoryDocument};
    use crate::math::Point3;
    use crate::solid::FrustumParams;

    fn setup() -> (MemoryDocument, SolidModel) {
        let mut doc = MemoryDocument::new(DocumentId(1));
        let solid = SolidModel::initialize(&mut doc, &FrustumParams::default()).unwrap();
        (doc, solid)
    }

    fn distances(points: &[Point3], center: &Point3) -> Vec<f64> {
        points.iter().map(|p| (p - center).norm()).collect()
    }

    #[test]
    fn doubles_distances_from_center() {
        let (mut doc, mut solid) = setup();
        solid.move_by(&mut doc, 3.0, -1.0, 2.0).unwrap();
        let center = solid.center();
        let before = distances(&solid.vertices(&doc).unwrap(), &center);

        solid.scale(&mut doc, 2.0).unwrap();

        assert_abs_diff_eq!(solid.center(), center);
        let after = distances(&solid.vertices(&doc).unwrap(), &center);
        for (a, b) in before.iter().zip(&after) {
            assert_abs_diff_eq!(*b, 2.0 * a, epsilon = 1e-9);
        }
    }

    #[test]
    fn scale_and_inverse_round_trip() {
        let (mut doc, mut solid) = setup();
        let center = solid.center();
        let before = distances(&solid.vertices(&doc).unwrap(), &center);
        for s in [0.25, 1.0, 3.7] {
            solid.scale(&mut doc, s).unwrap();
            solid.scale(&mut doc, 1.0 / s).unwrap();
        }
        let after = distances(&solid.vertices(&doc).unwrap(), &center);
        for (a, b) in before.iter().zip(&after) {
            assert_abs_diff_eq!(a, b, epsilon = 1e-9);
        }
    }

    #[test]
    fn failed_scale_is_rolled_back() {
        let (mut doc, mut solid) = setup();
        let before = solid.vertices(&doc).unwrap();
        doc.interrupt_after(4);
        assert!(solid.scale(&mut doc, 3.0).is_err());
        for (a, b) in before.iter().zip(solid.vertices(&doc).unwrap()) {
            assert_abs_diff_eq!(*a, b, epsilon = 1e-9);
        }
    }
}
