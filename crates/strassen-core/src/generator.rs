//! Random operand generation for demos and benchmarks.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::constants::DEFAULT_MAX_VALUE;
use crate::matrix::{Element, Matrix};

/// Produces square matrices with entries drawn uniformly from `0..max_value`.
pub struct MatrixGenerator {
    rng: StdRng,
    max_value: Element,
}

impl MatrixGenerator {
    /// Seeded generator, or entropy-seeded when `seed` is `None`.
    ///
    /// `max_value` is clamped to at least 1 (an all-zero range).
    #[must_use]
    pub fn new(seed: Option<u64>, max_value: Element) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng,
            max_value: max_value.max(1),
        }
    }

    /// Generate one `n x n` matrix.
    pub fn square(&mut self, n: usize) -> Matrix {
        let max = self.max_value;
        Matrix::from_fn(n, n, |_, _| self.rng.gen_range(0..max))
    }
}

impl Default for MatrixGenerator {
    fn default() -> Self {
        Self::new(None, DEFAULT_MAX_VALUE)
    }
}
