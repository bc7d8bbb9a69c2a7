use nalgebra::{Rotation3, Unit};

use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};

/// The four corners of a drawn 3D face.
///
/// Triangles repeat their first corner in the fourth slot.
pub type Corners = [Point3; 4];

/// Corner geometry of a single planar face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceGeometry {
    corners: Corners,
}

impl FaceGeometry {
    /// Creates a face from four corners.
    #[must_use]
    pub fn new(corners: Corners) -> Self {
        Self { corners }
    }

    /// Creates a triangular face; the fourth corner duplicates the first.
    #[must_use]
    pub fn triangle(a: Point3, b: Point3, c: Point3) -> Self {
        Self::new([a, b, c, a])
    }

    /// Creates a quadrilateral face.
    #[must_use]
    pub fn quad(a: Point3, b: Point3, c: Point3, d: Point3) -> Self {
        Self::new([a, b, c, d])
    }

    /// Returns all four stored corners.
    #[must_use]
    pub fn corners(&self) -> &Corners {
        &self.corners
    }

    /// Returns `true` if the fourth corner repeats the first.
    #[must_use]
    pub fn is_triangle(&self) -> bool {
        (self.corners[3] - self.corners[0]).norm() < TOLERANCE
    }

    /// Returns the corners that are not a duplicated closing corner.
    #[must_use]
    pub fn distinct_corners(&self) -> &[Point3] {
        if self.is_triangle() {
            &self.corners[..3]
        } else {
            &self.corners
        }
    }

    /// Applies `f` to every corner.
    #[must_use]
    pub fn map(&self, f: impl Fn(&Point3) -> Point3) -> Self {
        Self::new(self.corners.map(|p| f(&p)))
    }

    /// Translates all corners by `delta`.
    #[must_use]
    pub fn translated(&self, delta: &Vector3) -> Self {
        self.map(|p| p + delta)
    }

    /// Scales all corners about `pivot`.
    #[must_use]
    pub fn scaled(&self, pivot: &Point3, factor: f64) -> Self {
        self.map(|p| pivot + (p - pivot) * factor)
    }

    /// Reflects all corners across the plane through `anchor` spanned by
    /// `dir_a` and `dir_b`.
    ///
    /// # Errors
    ///
    /// Returns an error if the directions are zero-length or parallel.
    pub fn mirrored(&self, anchor: &Point3, dir_a: &Vector3, dir_b: &Vector3) -> Result<Self> {
        if dir_a.norm() < TOLERANCE || dir_b.norm() < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        let normal = dir_a.cross(dir_b);
        let len = normal.norm();
        if len < TOLERANCE {
            return Err(
                GeometryError::Degenerate("mirror plane directions are parallel".into()).into(),
            );
        }
        let n = normal / len;
        Ok(self.map(|p| p - n * (2.0 * (p - anchor).dot(&n))))
    }

    /// Rotates all corners about the line through `anchor` along `axis`.
    ///
    /// Positive angles follow the right-hand rule around `axis`.
    ///
    /// # Errors
    ///
    /// Returns an error if `axis` is zero-length.
    pub fn rotated(&self, anchor: &Point3, axis: &Vector3, angle: f64) -> Result<Self> {
        let len = axis.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        let rot = Rotation3::from_axis_angle(&Unit::new_unchecked(axis / len), angle);
        Ok(self.map(|p| anchor + rot * (p - anchor)))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use approx::assert_abs_diff_eq;

    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn triangle_repeats_first_corner() {
        let f = FaceGeometry::triangle(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0));
        assert!(f.is_triangle());
        assert_eq!(f.distinct_corners().len(), 3);
        assert_eq!(f.corners()[3], f.corners()[0]);
    }

    #[test]
    fn quad_keeps_four_corners() {
        let f = FaceGeometry::quad(
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(1.0, 1.0, 0.0),
            p(0.0, 1.0, 0.0),
        );
        assert!(!f.is_triangle());
        assert_eq!(f.distinct_corners().len(), 4);
    }

    #[test]
    fn mirror_through_offset_anchor() {
        let f = FaceGeometry::triangle(p(0.0, 0.0, 3.0), p(1.0, 0.0, 3.0), p(0.0, 1.0, 3.0));
        let m = f
            .mirrored(&p(0.0, 0.0, 1.0), &Vector3::x(), &Vector3::y())
            .unwrap();
        for c in m.corners() {
            assert_abs_diff_eq!(c.z, -1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn mirror_with_parallel_directions_fails() {
        let f = FaceGeometry::triangle(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0));
        assert!(f
            .mirrored(&Point3::origin(), &Vector3::x(), &(Vector3::x() * 3.0))
            .is_err());
    }

    #[test]
    fn rotation_follows_right_hand_rule() {
        let f = FaceGeometry::triangle(p(1.0, 0.0, 0.0), p(2.0, 0.0, 0.0), p(1.0, 1.0, 0.0));
        let r = f
            .rotated(&Point3::origin(), &(Vector3::z() * 10.0), FRAC_PI_2)
            .unwrap();
        assert_abs_diff_eq!(r.corners()[0], p(0.0, 1.0, 0.0), epsilon = 1e-12);
        assert_abs_diff_eq!(r.corners()[1], p(0.0, 2.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn scale_about_pivot() {
        let f = FaceGeometry::triangle(p(2.0, 0.0, 0.0), p(3.0, 0.0, 0.0), p(2.0, 1.0, 0.0));
        let s = f.scaled(&p(2.0, 0.0, 0.0), 2.0);
        assert_abs_diff_eq!(s.corners()[0], p(2.0, 0.0, 0.0));
        assert_abs_diff_eq!(s.corners()[1], p(4.0, 0.0, 0.0));
        assert_abs_diff_eq!(s.corners()[2], p(2.0, 2.0, 0.0));
    }
}
