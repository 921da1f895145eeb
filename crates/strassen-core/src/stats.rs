//! Task counters collected during a multiplication.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Lock-free counters shared by every task of one multiplication.
#[derive(Debug, Default)]
pub struct StatsCollector {
    tasks: AtomicU64,
    forks: AtomicU64,
    inline_levels: AtomicU64,
    base_products: AtomicU64,
    naive_blocks: AtomicU64,
}

impl StatsCollector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_task(&self) {
        self.tasks.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_fork(&self) {
        self.forks.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_inline(&self) {
        self.inline_levels.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_base_product(&self) {
        self.base_products.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_naive_block(&self) {
        self.naive_blocks.fetch_add(1, Ordering::Relaxed);
    }

    /// Read the counters. Only meaningful once every task has joined.
    #[must_use]
    pub fn snapshot(&self) -> MultiplyStats {
        MultiplyStats {
            tasks: self.tasks.load(Ordering::Relaxed),
            forks: self.forks.load(Ordering::Relaxed),
            inline_levels: self.inline_levels.load(Ordering::Relaxed),
            base_products: self.base_products.load(Ordering::Relaxed),
            naive_blocks: self.naive_blocks.load(Ordering::Relaxed),
        }
    }
}

/// Counters from one completed multiplication.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MultiplyStats {
    /// Tasks executed, root included.
    pub tasks: u64,
    /// Recursion levels whose seven children went through the scheduler.
    pub forks: u64,
    /// Recursion levels whose seven children ran inline.
    pub inline_levels: u64,
    /// 1x1 scalar products.
    pub base_products: u64,
    /// Blocks finished by the naive kernel.
    pub naive_blocks: u64,
}

impl MultiplyStats {
    /// Leaf tasks, whichever kernel finished them.
    #[must_use]
    pub fn leaves(&self) -> u64 {
        self.base_products + self.naive_blocks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_collector_is_zero() {
        assert_eq!(StatsCollector::new().snapshot(), MultiplyStats::default());
    }

    #[test]
    fn counters_accumulate() {
        let stats = StatsCollector::new();
        stats.record_task();
        stats.record_task();
        stats.record_fork();
        stats.record_inline();
        stats.record_base_product();
        stats.record_naive_block();
        stats.record_naive_block();

        let snap = stats.snapshot();
        assert_eq!(snap.tasks, 2);
        assert_eq!(snap.forks, 1);
        assert_eq!(snap.inline_levels, 1);
        assert_eq!(snap.leaves(), 3);
    }

    #[test]
    fn counters_from_many_threads() {
        let stats = StatsCollector::new();
        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| {
                    for _ in 0..100 {
                        stats.record_task();
                    }
                });
            }
        });
        assert_eq!(stats.snapshot().tasks, 400);
    }
}
