use crate::math::{Matrix, Vector3};

/// A coordinate axis through the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The OX axis.
    X,
    /// The OY axis.
    Y,
    /// The OZ axis.
    Z,
}

impl Axis {
    /// Unit direction of the axis.
    #[must_use]
    pub fn direction(self) -> Vector3 {
        match self {
            Self::X => Vector3::x(),
            Self::Y => Vector3::y(),
            Self::Z => Vector3::z(),
        }
    }

    /// Standard right-handed 3x3 rotation matrix about this axis.
    ///
    /// The matrix is laid out for column vectors. Multiplying a row vector
    /// by it (as the solid's center bookkeeping does) applies the transpose.
    #[must_use]
    pub fn rotation_matrix(self, angle: f64) -> Matrix {
        let (s, c) = angle.sin_cos();
        #[rustfmt::skip]
        let m = match self {
            Self::X => [
                1.0, 0.0, 0.0,
                0.0, c,   -s,
                0.0, s,   c,
            ],
            Self::Y => [
                c,   0.0, s,
                0.0, 1.0, 0.0,
                -s,  0.0, c,
            ],
            Self::Z => [
                c,   -s,  0.0,
                s,   c,   0.0,
                0.0, 0.0, 1.0,
            ],
        };
        Matrix::from_row_slice(3, 3, &m)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn z_rotation_turns_x_into_y() {
        let m = Axis::Z.rotation_matrix(FRAC_PI_2);
        let v = nalgebra::DVector::from_vec(vec![1.0, 0.0, 0.0]);
        let r = m * v;
        assert_abs_diff_eq!(r[0], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(r[1], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn rotation_matrices_are_orthonormal() {
        for axis in [Axis::X, Axis::Y, Axis::Z] {
            let m = axis.rotation_matrix(0.7);
            let id = m.transpose() * &m;
            assert_abs_diff_eq!(id, Matrix::identity(3, 3), epsilon = 1e-12);
        }
    }

    #[test]
    fn axis_is_fixed_by_its_rotation() {
        for axis in [Axis::X, Axis::Y, Axis::Z] {
            let d = axis.direction();
            let v = nalgebra::DVector::from_column_slice(d.as_slice());
            let r = axis.rotation_matrix(1.3) * &v;
            assert_abs_diff_eq!(r, v, epsilon = 1e-12);
        }
    }
}
