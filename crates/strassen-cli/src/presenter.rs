//! CLI result presenter.

use std::time::Duration;

use strassen_core::{Matrix, MultiplyStats};

use crate::output::{format_duration, format_matrix, matrix_to_json};

/// Outcome of one multiplication, as handed to a presenter.
#[derive(Debug, Clone)]
pub struct MultiplicationReport {
    pub product: Matrix,
    pub duration: Duration,
    pub scheduler: &'static str,
    pub threads: usize,
    pub stats: MultiplyStats,
}

/// Trait for presenting results to the user.
pub trait ResultPresenter {
    /// Present the two input matrices.
    fn present_operands(&self, a: &Matrix, b: &Matrix);

    /// Present the product and timing.
    fn present_result(&self, report: &MultiplicationReport);

    /// Present the outcome of a naive cross-check.
    fn present_verification(&self, matches: bool);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Presenter that prints to stdout/stderr.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
    json: bool,
    details: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool, json: bool, details: bool) -> Self {
        Self {
            verbose,
            quiet,
            json,
            details,
        }
    }

    /// Text printed for the operands, or `None` when they are suppressed.
    #[must_use]
    pub fn render_operands(&self, a: &Matrix, b: &Matrix) -> Option<String> {
        if self.quiet || self.json {
            return None;
        }
        Some(format!(
            "Matrix A:\n{}\nMatrix B:\n{}",
            format_matrix(a, self.verbose),
            format_matrix(b, self.verbose)
        ))
    }

    /// Text printed for a result.
    #[must_use]
    pub fn render_result(&self, report: &MultiplicationReport) -> String {
        if self.json {
            return matrix_to_json(&report.product)
                .unwrap_or_else(|e| format!("{{\"error\":\"{e}\"}}"));
        }
        if self.quiet {
            return report.product.to_string();
        }

        let mut out = format!(
            "Product:\n{}\nDuration: {}",
            format_matrix(&report.product, self.verbose),
            format_duration(report.duration)
        );
        if self.details {
            let s = &report.stats;
            out.push_str(&format!(
                "\nScheduler: {} ({} threads)\nTasks: {}\nForked levels: {}\nInline levels: {}\nScalar products: {}\nNaive blocks: {}",
                report.scheduler,
                report.threads,
                s.tasks,
                s.forks,
                s.inline_levels,
                s.base_products,
                s.naive_blocks,
            ));
        }
        out
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_operands(&self, a: &Matrix, b: &Matrix) {
        if let Some(text) = self.render_operands(a, b) {
            println!("{text}");
        }
    }

    fn present_result(&self, report: &MultiplicationReport) {
        println!("{}", self.render_result(report));
    }

    fn present_verification(&self, matches: bool) {
        if matches {
            if !self.quiet && !self.json {
                println!("Verification: OK (matches naive product)");
            }
        } else {
            eprintln!("Verification: FAILED (differs from naive product)");
        }
    }

    fn present_error(&self, error: &str) {
        eprintln!("Error: {error}");
    }
}
