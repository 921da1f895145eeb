//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::Parser;

use strassen_core::constants::{DEFAULT_DEMO_SIZE, DEFAULT_MAX_VALUE};
use strassen_core::{Element, Options};

/// Strassen-rs: parallel Strassen matrix multiplication.
#[derive(Parser, Debug)]
#[command(name = "strassen", version, about)]
pub struct AppConfig {
    /// Side length of the random operands (must be a power of two).
    #[arg(short = 'n', long, default_value_t = DEFAULT_DEMO_SIZE, env = "STRASSEN_SIZE")]
    pub size: usize,

    /// Seed for the random operands.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Random entries are drawn from 0..MAX_VALUE.
    #[arg(long, default_value_t = DEFAULT_MAX_VALUE)]
    pub max_value: Element,

    /// Read operands from a JSON file: {"a": {"rows": [...]}, "b": {"rows": [...]}}.
    #[arg(short, long, conflicts_with = "seed")]
    pub input: Option<PathBuf>,

    /// Worker threads (0 = shared pool sized to the machine).
    #[arg(short, long, default_value = "0", env = "STRASSEN_THREADS")]
    pub threads: usize,

    /// Finish blocks of this side length or smaller with the naive kernel (0 = recurse to 1x1).
    #[arg(long, default_value = "0")]
    pub cutover: usize,

    /// Smallest block side length whose sub-products are forked (0 = default).
    #[arg(long, default_value = "0")]
    pub parallel_threshold: usize,

    /// Run on the calling thread only.
    #[arg(long, conflicts_with = "threads")]
    pub sequential: bool,

    /// Cross-check the product against the naive algorithm.
    #[arg(long)]
    pub verify: bool,

    /// Print matrices in full, however large.
    #[arg(short, long)]
    pub verbose: bool,

    /// Show scheduler and task statistics.
    #[arg(short, long)]
    pub details: bool,

    /// Quiet mode (only print the product).
    #[arg(short, long)]
    pub quiet: bool,

    /// Print the product as JSON.
    #[arg(long)]
    pub json: bool,

    /// Write the product as JSON to this file.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Core multiplication options derived from the flags.
    #[must_use]
    pub fn options(&self) -> Options {
        Options {
            cutover: self.cutover,
            parallel_threshold: self.parallel_threshold,
        }
        .normalize()
    }
}
