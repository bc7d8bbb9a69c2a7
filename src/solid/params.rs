use std::f64::consts::TAU;

use crate::error::{OperationError, Result};
use crate::math::Point3;

/// Dimensions of a triangular frustum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrustumParams {
    base_radius: f64,
    top_radius: f64,
    height: f64,
}

impl Default for FrustumParams {
    fn default() -> Self {
        Self {
            base_radius: 10.0,
            top_radius: 5.0,
            height: 8.0,
        }
    }
}

impl FrustumParams {
    /// Creates frustum dimensions.
    ///
    /// # Errors
    ///
    /// Returns an error if a radius is not positive or the height is zero.
    pub fn new(base_radius: f64, top_radius: f64, height: f64) -> Result<Self> {
        if !(base_radius.is_finite() && top_radius.is_finite() && height.is_finite()) {
            return Err(
                OperationError::InvalidInput("frustum dimensions must be finite".into()).into(),
            );
        }
        if base_radius <= 0.0 || top_radius <= 0.0 {
            return Err(
                OperationError::InvalidInput("frustum radii must be positive".into()).into(),
            );
        }
        if height == 0.0 {
            return Err(
                OperationError::InvalidInput("frustum height must be non-zero".into()).into(),
            );
        }
        Ok(Self {
            base_radius,
            top_radius,
            height,
        })
    }

    /// Circumradius of the base triangle.
    #[must_use]
    pub fn base_radius(&self) -> f64 {
        self.base_radius
    }

    /// Circumradius of the top triangle.
    #[must_use]
    pub fn top_radius(&self) -> f64 {
        self.top_radius
    }

    /// Distance from the base plane to the top plane.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Base triangle vertices at angles `i * 2π/3`, on `z = 0`.
    #[must_use]
    pub fn base_vertices(&self) -> [Point3; 3] {
        ring(self.base_radius, 0.0)
    }

    /// Top triangle vertices at angles `i * 2π/3`, on `z = height`.
    #[must_use]
    pub fn top_vertices(&self) -> [Point3; 3] {
        ring(self.top_radius, self.height)
    }
}

fn ring(radius: f64, z: f64) -> [Point3; 3] {
    std::array::from_fn(|i| {
        #[allow(clippy::cast_precision_loss)]
        let angle = i as f64 * TAU / 3.0;
        Point3::new(radius * angle.cos(), radius * angle.sin(), z)
    })
}
