//! Error handling and exit codes.

use strassen_cli::InputError;
use strassen_core::constants::exit_codes;
use strassen_core::MatrixError;

/// Failures raised by the application layer itself.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Strassen product differs from the naive product")]
    VerificationFailed,
}

/// Map an application error to the process exit code.
pub fn handle_error(err: &anyhow::Error) -> i32 {
    if let Some(AppError::VerificationFailed) = err.downcast_ref::<AppError>() {
        return exit_codes::ERROR_MISMATCH;
    }
    if err.downcast_ref::<InputError>().is_some() {
        return exit_codes::ERROR_CONFIG;
    }
    match err.downcast_ref::<MatrixError>() {
        Some(MatrixError::InvalidDimension(_)) => exit_codes::ERROR_CONFIG,
        _ => exit_codes::ERROR_GENERIC,
    }
}
