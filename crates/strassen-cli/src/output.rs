//! CLI output formatting.

use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use strassen_core::Matrix;

/// Matrices with more rows or columns than this are truncated unless verbose.
pub const TRUNCATE_ABOVE: usize = 16;

/// Side of the top-left block shown for truncated matrices.
pub const PREVIEW_SIZE: usize = 8;

/// Format a matrix row-major with right-aligned columns, truncating large ones.
#[must_use]
pub fn format_matrix(matrix: &Matrix, verbose: bool) -> String {
    let truncated =
        !verbose && (matrix.rows() > TRUNCATE_ABOVE || matrix.cols() > TRUNCATE_ABOVE);
    let (rows, cols) = if truncated {
        (
            matrix.rows().min(PREVIEW_SIZE),
            matrix.cols().min(PREVIEW_SIZE),
        )
    } else {
        (matrix.rows(), matrix.cols())
    };

    let cells: Vec<Vec<String>> = (0..rows)
        .map(|r| matrix.row(r)[..cols].iter().map(ToString::to_string).collect())
        .collect();
    let width = cells.iter().flatten().map(String::len).max().unwrap_or(0);

    let mut lines: Vec<String> = cells
        .iter()
        .map(|row| {
            let mut line = row
                .iter()
                .map(|cell| format!("{cell:>width$}"))
                .collect::<Vec<_>>()
                .join(" ");
            if truncated && cols < matrix.cols() {
                line.push_str(" ...");
            }
            line
        })
        .collect();

    if truncated {
        lines.push(format!("... ({} matrix)", matrix.shape()));
    }
    lines.join("\n")
}

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Serialize a matrix as `{"rows": [[..], ..]}`.
pub fn matrix_to_json(matrix: &Matrix) -> serde_json::Result<String> {
    serde_json::to_string(matrix)
}

/// Write a matrix to a file as JSON.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &Path, matrix: &Matrix) -> io::Result<()> {
    let json = matrix_to_json(matrix).map_err(io::Error::other)?;
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "{json}")?;
    Ok(())
}
