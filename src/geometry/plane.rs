use crate::math::{Point3, Vector3};

/// A coordinate plane through the origin used as a mirror.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MirrorPlane {
    /// The XOY plane; reflection negates z.
    Xoy,
    /// The YOZ plane; reflection negates x.
    Yoz,
    /// The XOZ plane; reflection negates y.
    Xoz,
}

impl MirrorPlane {
    /// Two in-plane direction vectors spanning the plane.
    #[must_use]
    pub fn directions(self) -> (Vector3, Vector3) {
        match self {
            Self::Xoy => (Vector3::x(), Vector3::y()),
            Self::Yoz => (Vector3::y(), Vector3::z()),
            Self::Xoz => (Vector3::x(), Vector3::z()),
        }
    }

    /// Reflects a point across the plane.
    #[must_use]
    pub fn reflect(self, point: &Point3) -> Point3 {
        match self {
            Self::Xoy => Point3::new(point.x, point.y, -point.z),
            Self::Yoz => Point3::new(-point.x, point.y, point.z),
            Self::Xoz => Point3::new(point.x, -point.y, point.z),
        }
    }
}
