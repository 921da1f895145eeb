//! The recursive Strassen task.
//!
//! A task owns two `n x n` operands. `compute` either finishes directly (1x1
//! scalar product, or the naive kernel at or below the cutover) or splits
//! both operands into quadrants, forms the seven Strassen sub-products as
//! child tasks, runs them through the scheduler, and recombines:
//!
//! ```text
//! P1 = (A11 + A22)(B11 + B22)     C11 = P1 + P4 - P5 + P7
//! P2 = (A21 + A22) B11            C12 = P3 + P5
//! P3 = A11 (B12 - B22)            C21 = P2 + P4
//! P4 = A22 (B21 - B11)            C22 = P1 - P2 + P3 + P6
//! P5 = (A11 + A12) B22
//! P6 = (A21 - A11)(B11 + B12)
//! P7 = (A12 - A22)(B21 + B22)
//! ```

use tracing::trace;

use crate::arithmetic::{add, subtract};
use crate::base_case::{multiply_1x1, multiply_naive};
use crate::constants::{BASE_CASE_SIZE, STRASSEN_PRODUCTS};
use crate::error::MatrixError;
use crate::matrix::Matrix;
use crate::options::Options;
use crate::partition::{merge, split, Quadrants};
use crate::scheduler::{Scheduler, SequentialScheduler};
use crate::stats::StatsCollector;

/// Everything a task needs besides its operands. Shared by reference across
/// all tasks of one multiplication.
pub struct TaskContext<'a, S: Scheduler> {
    scheduler: &'a S,
    options: &'a Options,
    stats: &'a StatsCollector,
}

impl<'a, S: Scheduler> TaskContext<'a, S> {
    #[must_use]
    pub fn new(scheduler: &'a S, options: &'a Options, stats: &'a StatsCollector) -> Self {
        Self {
            scheduler,
            options,
            stats,
        }
    }
}

/// One pending multiplication of two owned `n x n` matrices.
///
/// `compute` consumes the task, so each task runs exactly once.
#[derive(Debug)]
pub struct StrassenTask {
    a: Matrix,
    b: Matrix,
    size: usize,
}

impl StrassenTask {
    /// Create a task.
    ///
    /// # Panics
    ///
    /// Panics if the operands are not square, differ in shape, or have a side
    /// length that is not a power of two. Callers validate user input with
    /// [`crate::validator::accept`] first; reaching this panic is a bug.
    #[must_use]
    pub fn new(a: Matrix, b: Matrix) -> Self {
        assert!(
            a.is_square() && a.shape() == b.shape(),
            "Strassen operands must be equal squares, got {} and {}",
            a.shape(),
            b.shape()
        );
        let size = a.rows();
        assert!(
            size.is_power_of_two(),
            "Strassen side length must be a power of two, got {size}"
        );
        Self { a, b, size }
    }

    /// Side length of the operands and of the product.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Multiply the operands, forking sub-products through the context's scheduler.
    pub fn compute<S: Scheduler>(self, ctx: &TaskContext<'_, S>) -> Result<Matrix, MatrixError> {
        ctx.stats.record_task();

        if self.size == BASE_CASE_SIZE {
            ctx.stats.record_base_product();
            return Ok(multiply_1x1(&self.a, &self.b));
        }
        if self.size <= ctx.options.cutover {
            ctx.stats.record_naive_block();
            return multiply_naive(&self.a, &self.b);
        }

        let size = self.size;
        let children = self.into_children()?;

        let products = if size >= ctx.options.parallel_threshold {
            trace!(size, "forking sub-products");
            ctx.stats.record_fork();
            ctx.scheduler.run_all(children, |task| task.compute(ctx))
        } else {
            ctx.stats.record_inline();
            SequentialScheduler.run_all(children, |task| task.compute(ctx))
        };

        let [p1, p2, p3, p4, p5, p6, p7] = products;
        combine([p1?, p2?, p3?, p4?, p5?, p6?, p7?])
    }

    /// Partition both operands and build the seven child tasks P1..P7.
    fn into_children(self) -> Result<[StrassenTask; STRASSEN_PRODUCTS], MatrixError> {
        let half = self.size / 2;
        let Quadrants {
            q11: a11,
            q12: a12,
            q21: a21,
            q22: a22,
        } = split(&self.a, half)?;
        let Quadrants {
            q11: b11,
            q12: b12,
            q21: b21,
            q22: b22,
        } = split(&self.b, half)?;

        Ok([
            Self::new(add(&a11, &a22)?, add(&b11, &b22)?),
            Self::new(add(&a21, &a22)?, b11.clone()),
            Self::new(a11.clone(), subtract(&b12, &b22)?),
            Self::new(a22.clone(), subtract(&b21, &b11)?),
            Self::new(add(&a11, &a12)?, b22.clone()),
            Self::new(subtract(&a21, &a11)?, add(&b11, &b12)?),
            Self::new(subtract(&a12, &a22)?, add(&b21, &b22)?),
        ])
    }
}

/// Recombine the seven sub-products into the quadrants of the parent product.
fn combine(products: [Matrix; STRASSEN_PRODUCTS]) -> Result<Matrix, MatrixError> {
    let [p1, p2, p3, p4, p5, p6, p7] = products;

    let c11 = add(&subtract(&add(&p1, &p4)?, &p5)?, &p7)?;
    let c12 = add(&p3, &p5)?;
    let c21 = add(&p2, &p4)?;
    let c22 = add(&add(&subtract(&p1, &p2)?, &p3)?, &p6)?;

    merge(&c11, &c12, &c21, &c22)
}
