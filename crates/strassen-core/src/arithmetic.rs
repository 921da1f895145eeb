//! Element-wise matrix addition and subtraction.

use crate::error::MatrixError;
use crate::matrix::{Element, Matrix};

/// `a + b`, element-wise with wrapping arithmetic.
pub fn add(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    zip_with(a, b, Element::wrapping_add)
}

/// `a - b`, element-wise with wrapping arithmetic.
pub fn subtract(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    zip_with(a, b, Element::wrapping_sub)
}

/// Fail with `DimensionMismatch` unless `found` has the shape of `expected`.
pub(crate) fn ensure_same_shape(expected: &Matrix, found: &Matrix) -> Result<(), MatrixError> {
    if expected.shape() == found.shape() {
        Ok(())
    } else {
        Err(MatrixError::mismatch(expected.shape(), found.shape()))
    }
}

fn zip_with(
    a: &Matrix,
    b: &Matrix,
    op: fn(Element, Element) -> Element,
) -> Result<Matrix, MatrixError> {
    ensure_same_shape(a, b)?;
    let data = a
        .as_slice()
        .iter()
        .zip(b.as_slice())
        .map(|(&x, &y)| op(x, y))
        .collect();
    Ok(Matrix::from_parts(a.rows(), a.cols(), data))
}
