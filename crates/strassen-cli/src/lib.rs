//! # strassen-cli
//!
//! CLI output formatting, operand loading, result presentation, and shell
//! completion.

pub mod completion;
pub mod input;
pub mod output;
pub mod presenter;

pub use input::{load_operands, InputError, Operands};
pub use presenter::{CLIResultPresenter, MultiplicationReport, ResultPresenter};
