//! Loading operand pairs from JSON files.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use strassen_core::Matrix;

/// Error while reading an operand file.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// The two matrices to multiply, as stored on disk:
/// `{"a": {"rows": [[..]]}, "b": {"rows": [[..]]}}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Operands {
    pub a: Matrix,
    pub b: Matrix,
}

/// Parse operands from a JSON string.
pub fn parse_operands(json: &str) -> serde_json::Result<Operands> {
    serde_json::from_str(json)
}

/// Read and parse an operand file.
pub fn load_operands(path: &Path) -> Result<Operands, InputError> {
    let text = std::fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let operands = parse_operands(&text).map_err(|source| InputError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(
        path = %path.display(),
        a = %operands.a.shape(),
        b = %operands.b.shape(),
        "Loaded operands"
    );
    Ok(operands)
}
