use crate::error::{OperationError, Result};

use super::{Matrix, Point3};

/// Dense matrix product `a * b`.
///
/// # Errors
///
/// Returns [`OperationError::NonConformant`] if the column count of `a`
/// differs from the row count of `b`.
pub fn multiply_matrix(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    if a.ncols() != b.nrows() {
        return Err(OperationError::NonConformant {
            left: a.shape(),
            right: b.shape(),
        }
        .into());
    }

    Ok(a * b)
}

/// Packs a point into a 1x3 row vector.
#[must_use]
pub fn row_vector(point: &Point3) -> Matrix {
    Matrix::from_row_slice(1, 3, &[point.x, point.y, point.z])
}

/// Multiplies the row vector of `point` by a 3x3 matrix.
///
/// # Errors
///
/// Returns an error if `m` is not 3x3.
pub fn transform_row(point: &Point3, m: &Matrix) -> Result<Point3> {
    let r = multiply_matrix(&row_vector(point), m)?;
    if r.ncols() != 3 {
        return Err(OperationError::NonConformant {
            left: (1, 3),
            right: m.shape(),
        }
        .into());
    }
    Ok(Point3::new(r[(0, 0)], r[(0, 1)], r[(0, 2)]))
}
