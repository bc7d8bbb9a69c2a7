use tracing::debug;

use crate::document::Document;
use crate::error::{GeometryError, Result};
use crate::geometry::FaceGeometry;
use crate::math::{is_finite_point, Point3, TOLERANCE};
use crate::solid::SolidModel;

use super::{draw_faces, ProjectionResult};

/// Projects `p` through the viewpoint `c` onto the plane `z = z0`.
///
/// # Errors
///
/// Returns [`GeometryError::CoplanarViewpoint`] if `p` lies in the plane
/// `z = c.z`, and [`GeometryError::NonFinite`] if the result overflows.
pub fn project_point(p: &Point3, c: &Point3, z0: f64) -> Result<Point3> {
    let depth = p.z - c.z;
    if depth.abs() < TOLERANCE {
        return Err(GeometryError::CoplanarViewpoint {
            point_z: p.z,
            viewpoint_z: c.z,
        }
        .into());
    }

    let k = (z0 - c.z) / depth;
    let projected = Point3::new(c.x + (p.x - c.x) * k, c.y + (p.y - c.y) * k, z0);
    if !is_finite_point(&projected) {
        return Err(GeometryError::NonFinite.into());
    }
    Ok(projected)
}

/// Perspective (central) projection of a solid from a viewpoint.
#[derive(Debug)]
pub struct CentralView {
    viewpoint: Point3,
    plane_z: f64,
}

impl CentralView {
    /// Creates a new `CentralView` projecting onto `z = 0`.
    #[must_use]
    pub fn new(viewpoint: Point3) -> Self {
        Self {
            viewpoint,
            plane_z: 0.0,
        }
    }

    /// Projects onto `z = plane_z` instead.
    #[must_use]
    pub fn with_plane_z(mut self, plane_z: f64) -> Self {
        self.plane_z = plane_z;
        self
    }

    /// Executes the projection, drawing one face per source face.
    ///
    /// # Errors
    ///
    /// Returns a geometry error if any corner is coplanar with the
    /// viewpoint; nothing is drawn in that case.
    pub fn execute<D: Document + ?Sized>(
        &self,
        solid: &SolidModel,
        doc: &mut D,
    ) -> Result<ProjectionResult> {
        let faces = solid
            .face_geometry(&*doc)?
            .iter()
            .map(|face| -> Result<FaceGeometry> {
                let c = face.corners();
                Ok(FaceGeometry::new([
                    project_point(&c[0], &self.viewpoint, self.plane_z)?,
                    project_point(&c[1], &self.viewpoint, self.plane_z)?,
                    project_point(&c[2], &self.viewpoint, self.plane_z)?,
                    project_point(&c[3], &self.viewpoint, self.plane_z)?,
                ]))
            })
            .collect::<Result<Vec<_>>>()?;

        let result = draw_faces(doc, faces)?;
        debug!(viewpoint = ?self.viewpoint, plane_z = self.plane_z, "central view drawn");
        Ok(result)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::document::{DocumentId, MemoryDocument};
    use crate::error::FrustraError;
    use crate::solid::{FrustumParams, BASE_FACE, FACE_COUNT, TOP_FACE};

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn point_on_axis_projects_to_origin() {
        let r = project_point(&p(0.0, 0.0, 5.0), &p(0.0, 0.0, 10.0), 0.0).unwrap();
        assert_abs_diff_eq!(r, Point3::origin());
    }

    #[test]
    fn halfway_point_doubles_offset() {
        let r = project_point(&p(1.0, -2.0, 5.0), &p(0.0, 0.0, 10.0), 0.0).unwrap();
        assert_abs_diff_eq!(r, p(2.0, -4.0, 0.0));
    }

    #[test]
    fn coplanar_point_is_domain_error() {
        let err = project_point(&p(3.0, 4.0, 10.0), &p(0.0, 0.0, 10.0), 0.0).unwrap_err();
        assert!(matches!(
            err,
            FrustraError::Geometry(GeometryError::CoplanarViewpoint { .. })
        ));
    }

    #[test]
    fn points_on_plane_stay_put() {
        let r = project_point(&p(7.0, 8.0, 0.0), &p(1.0, 2.0, 20.0), 0.0).unwrap();
        assert_abs_diff_eq!(r, p(7.0, 8.0, 0.0));
    }

    #[test]
    fn central_view_draws_five_faces_on_plane() {
        let mut doc = MemoryDocument::new(DocumentId(1));
        let solid = SolidModel::initialize(&mut doc, &FrustumParams::default()).unwrap();

        let result = solid.central_view(&mut doc, 0.0, 0.0, 16.0).unwrap();
        let ProjectionResult::Faces { handles, faces } = result else {
            panic!("central view must produce faces");
        };

        assert_eq!(handles.len(), FACE_COUNT);
        assert_eq!(doc.face_count(), 2 * FACE_COUNT);
        for face in &faces {
            for c in face.corners() {
                assert_abs_diff_eq!(c.z, 0.0);
            }
        }
        // Base is on the projection plane; top (z = 8, halfway) doubles.
        let source = solid.face_geometry(&doc).unwrap();
        assert_eq!(faces[BASE_FACE], source[BASE_FACE]);
        assert_abs_diff_eq!(faces[TOP_FACE].corners()[0], p(10.0, 0.0, 0.0), epsilon = 1e-9);
    }

    #[test]
    fn failed_central_view_draws_nothing() {
        let mut doc = MemoryDocument::new(DocumentId(1));
        let solid = SolidModel::initialize(&mut doc, &FrustumParams::default()).unwrap();
        assert!(solid.central_view(&mut doc, 1.0, 1.0, 8.0).is_err());
        assert_eq!(doc.face_count(), FACE_COUNT);
    }

    #[test]
    fn custom_projection_plane() {
        let mut doc = MemoryDocument::new(DocumentId(1));
        let solid = SolidModel::initialize(&mut doc, &FrustumParams::default()).unwrap();
        let result = CentralView::new(p(0.0, 0.0, 20.0))
            .with_plane_z(-4.0)
            .execute(&solid, &mut doc)
            .unwrap();
        for point in result.points() {
            assert_abs_diff_eq!(point.z, -4.0);
        }
    }
}
