//! Fork-join schedulers for the seven sibling sub-products.
//!
//! `Scheduler::run_all` forks seven tasks and blocks until all have joined,
//! returning results in submission order. `RayonScheduler` runs them on a
//! work-stealing pool shared by every recursion level; `SequentialScheduler`
//! runs them inline.

use std::sync::OnceLock;

use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::constants::{STRASSEN_PRODUCTS, WORKER_THREAD_PREFIX};
use crate::error::MatrixError;

/// A fork-join execution engine.
pub trait Scheduler: Sync {
    /// Run `a` and `b`, potentially in parallel, and return both results.
    fn join<A, B, RA, RB>(&self, a: A, b: B) -> (RA, RB)
    where
        A: FnOnce() -> RA + Send,
        B: FnOnce() -> RB + Send,
        RA: Send,
        RB: Send;

    /// Number of worker threads available to forked tasks.
    fn threads(&self) -> usize;

    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Apply `f` to each of seven items concurrently and join.
    ///
    /// Result `i` always comes from item `i`, whatever order the tasks
    /// actually ran in. The fork is a balanced tree of `join` calls.
    fn run_all<I, T, F>(&self, items: [I; STRASSEN_PRODUCTS], f: F) -> [T; STRASSEN_PRODUCTS]
    where
        I: Send,
        T: Send,
        F: Fn(I) -> T + Sync,
    {
        let [i1, i2, i3, i4, i5, i6, i7] = items;
        let f = &f;
        let (((r1, r2), (r3, r4)), ((r5, r6), r7)) = self.join(
            move || {
                self.join(
                    move || self.join(move || f(i1), move || f(i2)),
                    move || self.join(move || f(i3), move || f(i4)),
                )
            },
            move || {
                self.join(
                    move || self.join(move || f(i5), move || f(i6)),
                    move || f(i7),
                )
            },
        );
        [r1, r2, r3, r4, r5, r6, r7]
    }
}

/// Work-stealing scheduler backed by a rayon thread pool.
pub struct RayonScheduler {
    pool: ThreadPool,
}

impl RayonScheduler {
    /// Build a dedicated pool with `threads` workers (0 = one per logical CPU).
    pub fn new(threads: usize) -> Result<Self, MatrixError> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("{WORKER_THREAD_PREFIX}-{i}"))
            .build()
            .map_err(|e| MatrixError::Scheduler(format!("failed to create thread pool: {e}")))?;
        Ok(Self { pool })
    }

    /// The process-wide scheduler, built on first use and reused afterwards.
    pub fn global() -> Result<&'static Self, MatrixError> {
        static GLOBAL: OnceLock<Result<RayonScheduler, MatrixError>> = OnceLock::new();
        GLOBAL
            .get_or_init(|| Self::new(0))
            .as_ref()
            .map_err(MatrixError::clone)
    }
}

impl Scheduler for RayonScheduler {
    fn join<A, B, RA, RB>(&self, a: A, b: B) -> (RA, RB)
    where
        A: FnOnce() -> RA + Send,
        B: FnOnce() -> RB + Send,
        RA: Send,
        RB: Send,
    {
        // Already on one of our workers: fork in place so nested levels share the pool.
        if self.pool.current_thread_index().is_some() {
            rayon::join(a, b)
        } else {
            self.pool.install(|| rayon::join(a, b))
        }
    }

    fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    fn name(&self) -> &'static str {
        "rayon"
    }
}

/// Runs every task inline on the calling thread, in submission order.
#[derive(Debug, Default, Clone, Copy)]
pub struct SequentialScheduler;

impl Scheduler for SequentialScheduler {
    fn join<A, B, RA, RB>(&self, a: A, b: B) -> (RA, RB)
    where
        A: FnOnce() -> RA + Send,
        B: FnOnce() -> RB + Send,
        RA: Send,
        RB: Send,
    {
        (a(), b())
    }

    fn threads(&self) -> usize {
        1
    }

    fn name(&self) -> &'static str {
        "sequential"
    }
}
