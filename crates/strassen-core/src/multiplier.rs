//! Validated entry point wrapping the root `StrassenTask`.

use tracing::debug;

use crate::error::MatrixError;
use crate::matrix::Matrix;
use crate::options::Options;
use crate::scheduler::Scheduler;
use crate::stats::{MultiplyStats, StatsCollector};
use crate::strassen::{StrassenTask, TaskContext};
use crate::validator;

/// Strassen multiplier bound to a scheduler and a set of options.
///
/// The scheduler is borrowed, so one pool can serve any number of
/// multiplications.
pub struct Strassen<'s, S: Scheduler> {
    scheduler: &'s S,
    options: Options,
}

impl<'s, S: Scheduler> Strassen<'s, S> {
    #[must_use]
    pub fn new(scheduler: &'s S, options: Options) -> Self {
        Self {
            scheduler,
            options: options.normalize(),
        }
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Validate the operands and compute `a * b`.
    pub fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
        self.multiply_with_stats(a, b).map(|(product, _)| product)
    }

    /// Like [`Strassen::multiply`], also returning task counters.
    pub fn multiply_with_stats(
        &self,
        a: &Matrix,
        b: &Matrix,
    ) -> Result<(Matrix, MultiplyStats), MatrixError> {
        let n = validator::accept(a, b)?;
        debug!(
            size = n,
            scheduler = self.scheduler.name(),
            threads = self.scheduler.threads(),
            cutover = self.options.cutover,
            parallel_threshold = self.options.parallel_threshold,
            "Starting Strassen multiplication"
        );

        let collector = StatsCollector::new();
        let ctx = TaskContext::new(self.scheduler, &self.options, &collector);
        let product = StrassenTask::new(a.clone(), b.clone()).compute(&ctx)?;

        let stats = collector.snapshot();
        debug!(
            size = n,
            tasks = stats.tasks,
            forks = stats.forks,
            leaves = stats.leaves(),
            "Strassen multiplication complete"
        );
        Ok((product, stats))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::{RayonScheduler, SequentialScheduler};

    #[test]
    fn options_are_normalized() {
        let s = Strassen::new(
            &SequentialScheduler,
            Options {
                cutover: 0,
                parallel_threshold: 0,
            },
        );
        assert_eq!(s.options(), &Options::default());
    }

    #[test]
    fn rejects_before_computing() {
        let s = Strassen::new(&SequentialScheduler, Options::default());
        let err = s
            .multiply_with_stats(&Matrix::zeros(3), &Matrix::zeros(3))
            .unwrap_err();
        assert!(matches!(err, MatrixError::InvalidDimension(_)));
    }

    #[test]
    fn stats_for_8x8() {
        let sched = RayonScheduler::new(2).unwrap();
        let s = Strassen::new(&sched, Options::default());
        let (product, stats) = s
            .multiply_with_stats(&Matrix::identity(8), &Matrix::identity(8))
            .unwrap();
        assert_eq!(product, Matrix::identity(8));
        assert_eq!(stats.base_products, 343);
        assert_eq!(stats.tasks, 1 + 7 + 49 + 343);
    }

    #[test]
    fn pool_is_reusable_across_calls() {
        let sched = RayonScheduler::new(2).unwrap();
        let s = Strassen::new(&sched, Options::default());
        let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        for _ in 0..3 {
            assert_eq!(s.multiply(&a, &Matrix::identity(2)).unwrap(), a);
        }
    }
}
