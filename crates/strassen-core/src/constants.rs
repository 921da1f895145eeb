//! Constants for recursion thresholds and demo configuration.

use crate::matrix::Element;

/// Side length at which the recursion ends in a scalar product.
pub const BASE_CASE_SIZE: usize = 1;

/// Default cutover to the naive kernel (1 = recurse down to 1x1 blocks).
pub const DEFAULT_CUTOVER: usize = BASE_CASE_SIZE;

/// Default smallest side length whose sub-products are forked onto the pool.
///
/// With the default of 2 every non-base level forks its seven children.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 2;

/// Number of recursive sub-products per Strassen level.
pub const STRASSEN_PRODUCTS: usize = 7;

/// Default side length of the demo matrices.
pub const DEFAULT_DEMO_SIZE: usize = 8;

/// Default exclusive upper bound for random demo entries (`0..10`).
pub const DEFAULT_MAX_VALUE: Element = 10;

/// Name prefix for worker threads of the Strassen pool.
pub const WORKER_THREAD_PREFIX: &str = "strassen-worker";

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Strassen result disagreed with the naive reference during `--verify`.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration or input matrices.
    pub const ERROR_CONFIG: i32 = 4;
}
