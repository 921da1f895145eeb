//! Precondition checks performed once, before the recursion starts.

use crate::error::MatrixError;
use crate::matrix::Matrix;

/// Accept a pair of operands for Strassen multiplication.
///
/// Both matrices must be square, of the same side length `n`, with `n >= 1`
/// a power of two. Returns `n` on success.
pub fn accept(a: &Matrix, b: &Matrix) -> Result<usize, MatrixError> {
    if !a.is_square() {
        return Err(MatrixError::InvalidDimension(format!(
            "left operand is {}, expected a square matrix",
            a.shape()
        )));
    }
    if !b.is_square() {
        return Err(MatrixError::InvalidDimension(format!(
            "right operand is {}, expected a square matrix",
            b.shape()
        )));
    }
    if a.shape() != b.shape() {
        return Err(MatrixError::InvalidDimension(format!(
            "operands differ in size: {} vs {}",
            a.shape(),
            b.shape()
        )));
    }

    let n = a.rows();
    if n == 0 {
        return Err(MatrixError::InvalidDimension(
            "matrices must not be empty".into(),
        ));
    }
    if !n.is_power_of_two() {
        return Err(MatrixError::InvalidDimension(format!(
            "side length {n} is not a power of two"
        )));
    }
    Ok(n)
}
