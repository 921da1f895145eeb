//! Multiplication options and configuration.

use crate::constants::{DEFAULT_CUTOVER, DEFAULT_PARALLEL_THRESHOLD};

/// Tuning knobs for a Strassen multiplication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Blocks with side length at or below this are multiplied with the naive
    /// kernel instead of recursing further. 1 recurses down to scalars.
    pub cutover: usize,
    /// Smallest side length whose seven sub-products are forked onto the
    /// scheduler. Smaller blocks run their children inline.
    pub parallel_threshold: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            cutover: DEFAULT_CUTOVER,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl Options {
    /// Normalize options, applying defaults where values are zero.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.cutover == 0 {
            self.cutover = DEFAULT_CUTOVER;
        }
        if self.parallel_threshold == 0 {
            self.parallel_threshold = DEFAULT_PARALLEL_THRESHOLD;
        }
        self
    }
}
