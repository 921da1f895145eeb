//! # strassen-core
//!
//! Core library for Strassen-rs: Strassen's seven-product matrix
//! multiplication for square integer matrices whose side length is a power
//! of two, with the seven sub-products of every level forked onto a
//! work-stealing pool.
//!
//! Elements are `i32` and all arithmetic wraps on overflow; results agree
//! bit for bit with the schoolbook product under the same wrapping rules.

pub mod arithmetic;
pub mod base_case;
pub mod constants;
pub mod error;
pub mod generator;
pub mod matrix;
pub mod multiplier;
pub mod options;
pub mod partition;
pub mod scheduler;
pub mod stats;
pub mod strassen;
pub mod validator;

// Re-exports
pub use constants::{exit_codes, DEFAULT_CUTOVER, DEFAULT_PARALLEL_THRESHOLD};
pub use error::MatrixError;
pub use generator::MatrixGenerator;
pub use matrix::{Element, Matrix, Shape};
pub use multiplier::Strassen;
pub use options::Options;
pub use scheduler::{RayonScheduler, Scheduler, SequentialScheduler};
pub use stats::MultiplyStats;
pub use strassen::StrassenTask;

/// Multiply two matrices with Strassen's algorithm on the process-wide pool.
///
/// Fails with [`MatrixError::InvalidDimension`] unless both operands are
/// square, of equal size, with a power-of-two side length.
///
/// # Example
/// ```
/// use strassen_core::{strassen_multiply, Matrix};
///
/// let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
/// let b = Matrix::from_rows(vec![vec![5, 6], vec![7, 8]]).unwrap();
/// let c = strassen_multiply(&a, &b).unwrap();
/// assert_eq!(c.to_rows(), vec![vec![19, 22], vec![43, 50]]);
/// ```
pub fn strassen_multiply(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    let scheduler = RayonScheduler::global()?;
    Strassen::new(scheduler, Options::default()).multiply(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_example() {
        let a = Matrix::from_rows(vec![vec![7]]).unwrap();
        let b = Matrix::from_rows(vec![vec![6]]).unwrap();
        assert_eq!(strassen_multiply(&a, &b).unwrap().to_rows(), vec![vec![42]]);
    }

    #[test]
    fn rejects_non_square() {
        let a = Matrix::from_rows(vec![vec![1, 2]]).unwrap();
        assert!(matches!(
            strassen_multiply(&a, &a),
            Err(MatrixError::InvalidDimension(_))
        ));
    }
}
