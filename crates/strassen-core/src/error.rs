//! Error type shared by every matrix operation.

use crate::matrix::Shape;

/// Error type for matrix construction, validation, and multiplication.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatrixError {
    /// Operands rejected at the validation boundary (not square, different
    /// sizes, side length not a power of two) or malformed input rows.
    #[error("invalid dimensions: {0}")]
    InvalidDimension(String),

    /// Two matrices that must agree in shape do not. Only reachable through
    /// a broken internal invariant.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Shape the operation required.
        expected: Shape,
        /// Shape it was given.
        found: Shape,
    },

    /// The worker pool could not be created.
    #[error("scheduler error: {0}")]
    Scheduler(String),
}

impl MatrixError {
    /// Shorthand for a [`MatrixError::DimensionMismatch`].
    #[must_use]
    pub fn mismatch(expected: Shape, found: Shape) -> Self {
        Self::DimensionMismatch { expected, found }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_dimension_display() {
        let err = MatrixError::InvalidDimension("side length 3 is not a power of two".into());
        assert_eq!(
            err.to_string(),
            "invalid dimensions: side length 3 is not a power of two"
        );
    }

    #[test]
    fn mismatch_display() {
        let err = MatrixError::mismatch(Shape::square(2), Shape::new(2, 4));
        assert_eq!(err.to_string(), "dimension mismatch: expected 2x2, found 2x4");
    }

    #[test]
    fn scheduler_display() {
        let err = MatrixError::Scheduler("pool exhausted".into());
        assert_eq!(err.to_string(), "scheduler error: pool exhausted");
    }
}
