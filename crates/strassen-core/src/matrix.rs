//! Dense row-major integer matrix.
//!
//! Every operation in this crate allocates a fresh `Matrix`; nothing hands
//! out views into another matrix's storage.

use std::fmt;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::error::MatrixError;

/// Matrix element type.
///
/// Arithmetic on elements wraps on overflow (two's-complement, 32 bits).
pub type Element = i32;

/// Row and column count of a matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    #[must_use]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Shape of an `n x n` matrix.
    #[must_use]
    pub const fn square(n: usize) -> Self {
        Self { rows: n, cols: n }
    }

    #[must_use]
    pub const fn is_square(self) -> bool {
        self.rows == self.cols
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Dense integer matrix stored row-major.
///
/// The container accepts any `rows x cols` shape so that callers can hand
/// arbitrary input to the validator; the multiplication itself only ever
/// sees square matrices whose side is a power of two.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MatrixRepr", into = "MatrixRepr")]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<Element>,
}

impl Matrix {
    /// Create an `n x n` matrix of zeros.
    #[must_use]
    pub fn zeros(n: usize) -> Self {
        Self {
            rows: n,
            cols: n,
            data: vec![0; n * n],
        }
    }

    /// Create the `n x n` identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        Self::from_fn(n, n, |r, c| Element::from(r == c))
    }

    /// Build a matrix by evaluating `f(row, col)` for every cell in row-major order.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> Element) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                data.push(f(r, c));
            }
        }
        Self { rows, cols, data }
    }

    /// Wrap a row-major buffer.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<Element>) -> Result<Self, MatrixError> {
        if data.len() != rows * cols {
            return Err(MatrixError::InvalidDimension(format!(
                "{rows}x{cols} matrix needs {} elements, got {}",
                rows * cols,
                data.len()
            )));
        }
        Ok(Self { rows, cols, data })
    }

    /// Build a matrix from nested rows. Fails on ragged input.
    pub fn from_rows(rows: Vec<Vec<Element>>) -> Result<Self, MatrixError> {
        let cols = rows.first().map_or(0, Vec::len);
        let row_count = rows.len();
        let mut data = Vec::with_capacity(row_count * cols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != cols {
                return Err(MatrixError::InvalidDimension(format!(
                    "row {i} has {} columns, expected {cols}",
                    row.len()
                )));
            }
            data.extend(row);
        }
        Ok(Self {
            rows: row_count,
            cols,
            data,
        })
    }

    /// Internal constructor for buffers whose length is already known to fit.
    pub(crate) fn from_parts(rows: usize, cols: usize, data: Vec<Element>) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self { rows, cols, data }
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn shape(&self) -> Shape {
        Shape::new(self.rows, self.cols)
    }

    /// Side length of a square matrix.
    #[must_use]
    pub fn size(&self) -> usize {
        debug_assert!(self.is_square(), "size() called on {} matrix", self.shape());
        self.rows
    }

    #[must_use]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Element at (`row`, `col`), or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Element> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// Borrow one row.
    #[must_use]
    pub fn row(&self, row: usize) -> &[Element] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Iterate over rows as slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Element]> {
        // chunks_exact(0) panics, and a zero-column matrix has no data anyway.
        let width = self.cols.max(1);
        self.data.chunks_exact(width).take(self.rows)
    }

    /// Row-major element buffer.
    #[must_use]
    pub fn as_slice(&self) -> &[Element] {
        &self.data
    }

    /// Copy out as nested rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<Element>> {
        (0..self.rows).map(|r| self.row(r).to_vec()).collect()
    }

    /// True when every element is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|&x| x == 0)
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = Element;

    fn index(&self, (row, col): (usize, usize)) -> &Element {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {} matrix",
            self.shape()
        );
        &self.data[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Element {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {} matrix",
            self.shape()
        );
        &mut self.data[row * self.cols + col]
    }
}

/// Row-major text: one line per row, elements separated by a single space.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.iter_rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{value}")?;
            }
        }
        Ok(())
    }
}

/// Serialized form: `{"rows": [[..], ..]}`.
#[derive(Serialize, Deserialize)]
struct MatrixRepr {
    rows: Vec<Vec<Element>>,
}

impl TryFrom<MatrixRepr> for Matrix {
    type Error = MatrixError;

    fn try_from(repr: MatrixRepr) -> Result<Self, Self::Error> {
        Self::from_rows(repr.rows)
    }
}

impl From<Matrix> for MatrixRepr {
    fn from(matrix: Matrix) -> Self {
        Self {
            rows: matrix.to_rows(),
        }
    }
}
