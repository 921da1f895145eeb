//! Direct multiplication kernels.
//!
//! `multiply_1x1` is the recursion's base case. `multiply_naive` is the
//! schoolbook product: it finishes blocks at or below the configured cutover
//! and is the reference the Strassen result is checked against.

use crate::error::MatrixError;
use crate::matrix::{Element, Matrix, Shape};

/// Product of two 1x1 matrices.
#[must_use]
pub fn multiply_1x1(a: &Matrix, b: &Matrix) -> Matrix {
    debug_assert_eq!(a.shape(), Shape::square(1));
    debug_assert_eq!(b.shape(), Shape::square(1));
    Matrix::from_parts(1, 1, vec![a[(0, 0)].wrapping_mul(b[(0, 0)])])
}

/// Schoolbook product `a * b` in i-k-j loop order (`a` is m x k, `b` is k x n).
///
/// The inner loop walks a row of `b` and a row of the output, so both are
/// read and written sequentially.
pub fn multiply_naive(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    if a.cols() != b.rows() {
        return Err(MatrixError::mismatch(
            Shape::new(a.cols(), b.cols()),
            b.shape(),
        ));
    }

    let (m, n) = (a.rows(), b.cols());
    let mut out: Vec<Element> = vec![0; m * n];
    for i in 0..m {
        let out_row = &mut out[i * n..(i + 1) * n];
        for (p, &a_ip) in a.row(i).iter().enumerate() {
            for (cell, &b_pj) in out_row.iter_mut().zip(b.row(p)) {
                *cell = cell.wrapping_add(a_ip.wrapping_mul(b_pj));
            }
        }
    }
    Ok(Matrix::from_parts(m, n, out))
}
