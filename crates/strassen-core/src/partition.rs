//! Quadrant split and merge.
//!
//! `split` cuts a `2m x 2m` matrix at its midpoint into four freshly
//! allocated `m x m` blocks; `merge` is its exact inverse.

use crate::arithmetic::ensure_same_shape;
use crate::error::MatrixError;
use crate::matrix::{Matrix, Shape};

/// The four quadrants of a square matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quadrants {
    /// Top-left.
    pub q11: Matrix,
    /// Top-right.
    pub q12: Matrix,
    /// Bottom-left.
    pub q21: Matrix,
    /// Bottom-right.
    pub q22: Matrix,
}

/// Split `p` (which must be `2 * new_size` square) into its four quadrants.
pub fn split(p: &Matrix, new_size: usize) -> Result<Quadrants, MatrixError> {
    let expected = Shape::square(new_size * 2);
    if p.shape() != expected {
        return Err(MatrixError::mismatch(expected, p.shape()));
    }

    let block = new_size * new_size;
    let mut q11 = Vec::with_capacity(block);
    let mut q12 = Vec::with_capacity(block);
    let mut q21 = Vec::with_capacity(block);
    let mut q22 = Vec::with_capacity(block);

    for r in 0..new_size {
        let (left, right) = p.row(r).split_at(new_size);
        q11.extend_from_slice(left);
        q12.extend_from_slice(right);
    }
    for r in new_size..2 * new_size {
        let (left, right) = p.row(r).split_at(new_size);
        q21.extend_from_slice(left);
        q22.extend_from_slice(right);
    }

    Ok(Quadrants {
        q11: Matrix::from_parts(new_size, new_size, q11),
        q12: Matrix::from_parts(new_size, new_size, q12),
        q21: Matrix::from_parts(new_size, new_size, q21),
        q22: Matrix::from_parts(new_size, new_size, q22),
    })
}

/// Reassemble four equally sized square quadrants into one matrix of twice the side.
pub fn merge(
    c11: &Matrix,
    c12: &Matrix,
    c21: &Matrix,
    c22: &Matrix,
) -> Result<Matrix, MatrixError> {
    let half = c11.rows();
    if !c11.is_square() {
        return Err(MatrixError::mismatch(Shape::square(half), c11.shape()));
    }
    for quadrant in [c12, c21, c22] {
        ensure_same_shape(c11, quadrant)?;
    }

    let size = half * 2;
    let mut data = Vec::with_capacity(size * size);
    for r in 0..half {
        data.extend_from_slice(c11.row(r));
        data.extend_from_slice(c12.row(r));
    }
    for r in 0..half {
        data.extend_from_slice(c21.row(r));
        data.extend_from_slice(c22.row(r));
    }

    Ok(Matrix::from_parts(size, size, data))
}
