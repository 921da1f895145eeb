//! Application entry point and dispatch.

use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;

use strassen_cli::output::write_to_file;
use strassen_cli::{load_operands, CLIResultPresenter, MultiplicationReport, ResultPresenter};
use strassen_core::base_case::multiply_naive;
use strassen_core::{
    Matrix, MatrixError, MatrixGenerator, Options, RayonScheduler, Scheduler,
    SequentialScheduler, Strassen,
};

use crate::config::AppConfig;
use crate::errors::AppError;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        strassen_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let (a, b) = load_inputs(config)?;
    let presenter = CLIResultPresenter::new(config.verbose, config.quiet, config.json, config.details);
    presenter.present_operands(&a, &b);

    let opts = config.options();
    let report = if config.sequential {
        multiply(&SequentialScheduler, opts, &a, &b)?
    } else {
        let owned;
        let pool = if config.threads == 0 {
            RayonScheduler::global()?
        } else {
            owned = RayonScheduler::new(config.threads)?;
            &owned
        };
        multiply(pool, opts, &a, &b)?
    };
    presenter.present_result(&report);

    if config.verify {
        let expected = multiply_naive(&a, &b)?;
        let matches = expected == report.product;
        presenter.present_verification(matches);
        if !matches {
            return Err(AppError::VerificationFailed.into());
        }
    }

    if let Some(path) = &config.output {
        write_to_file(path, &report.product)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), "Product written");
    }

    Ok(())
}

fn load_inputs(config: &AppConfig) -> Result<(Matrix, Matrix)> {
    if let Some(path) = &config.input {
        let operands = load_operands(path)?;
        return Ok((operands.a, operands.b));
    }
    let mut generator = MatrixGenerator::new(config.seed, config.max_value);
    let a = generator.square(config.size);
    let b = generator.square(config.size);
    Ok((a, b))
}

fn multiply<S: Scheduler>(
    scheduler: &S,
    opts: Options,
    a: &Matrix,
    b: &Matrix,
) -> Result<MultiplicationReport, MatrixError> {
    let start = Instant::now();
    let (product, stats) = Strassen::new(scheduler, opts).multiply_with_stats(a, b)?;
    let duration = start.elapsed();
    info!(
        size = product.rows(),
        scheduler = scheduler.name(),
        elapsed = ?duration,
        "Multiplication finished"
    );
    Ok(MultiplicationReport {
        product,
        duration,
        scheduler: scheduler.name(),
        threads: scheduler.threads(),
        stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn config(args: &[&str]) -> AppConfig {
        AppConfig::try_parse_from(std::iter::once("strassen").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn seeded_inputs_are_reproducible() {
        let cfg = config(&["--seed", "9", "-n", "4"]);
        let first = load_inputs(&cfg).unwrap();
        let second = load_inputs(&cfg).unwrap();
        assert_eq!(first, second);
        assert_ne!(first.0, first.1);
    }

    #[test]
    fn multiply_reports_scheduler() {
        let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let b = Matrix::from_rows(vec![vec![5, 6], vec![7, 8]]).unwrap();
        let report = multiply(&SequentialScheduler, Options::default(), &a, &b).unwrap();
        assert_eq!(report.product.to_rows(), vec![vec![19, 22], vec![43, 50]]);
        assert_eq!(report.scheduler, SequentialScheduler.name());
        assert_eq!(report.threads, 1);
        assert_eq!(report.stats.base_products, 7);
    }

    #[test]
    fn run_rejects_non_power_of_two() {
        let err = run(&config(&["-n", "3", "-q"])).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<MatrixError>(),
            Some(MatrixError::InvalidDimension(_))
        ));
    }

    #[test]
    fn run_writes_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("product.json");
        let path_arg = path.to_str().unwrap();
        run(&config(&["-n", "4", "--seed", "3", "-q", "--verify", "-o", path_arg])).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let product: Matrix = serde_json::from_str(&text).unwrap();
        assert_eq!(product.rows(), 4);
    }
}
