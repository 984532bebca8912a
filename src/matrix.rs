//! Packed matrix storage, accessors and validation
//!
//! A [`Matrix`] is a single `Vec<f64>` carrying its own shape:
//!
//! ```text
//! [rows, cols, c00, c01, ..., c0n, c10, ..., cmn]
//!  ^^^^^^^^^^  ^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^
//!    header          cells, row-major
//! ```
//!
//! For a 2x3 matrix:
//! ```text
//! [[a, b, c],
//!  [d, e, f]]
//! ```
//! the buffer is `[2, 3, a, b, c, d, e, f]`.
//!
//! A buffer whose header disagrees with its length, or which holds no cells,
//! is still a `Matrix` value but fails [`Matrix::is_valid`], and every checked
//! operation rejects it.
//!
//! # Example
//!
//! ```
//! use dense_matrix::Matrix;
//!
//! let m = Matrix::zeros(2, 3);
//! assert_eq!(m.rows(), 2);
//! assert_eq!(m.cols(), 3);
//! assert_eq!(m.len(), 2 * 3 + 2);
//! ```

use std::fmt;

use crate::config::MatrixConfig;
use crate::error::{MatrixError, Result};

/// Number of header positions preceding the cells
pub const HEADER_LEN: usize = 2;

/// A dense matrix of `f64` with an inline `[rows, cols]` header
///
/// Equality is structural: two matrices are equal when their packed buffers
/// have the same length and the same value at every position, header
/// included. There is no tolerance.
///
/// # Example
///
/// ```
/// use dense_matrix::Matrix;
///
/// let m = Matrix::build(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
/// assert_eq!(m.at(0, 1), 2.0);
/// assert_eq!(m.at(1, 0), 3.0);
/// assert_eq!(m.as_packed(), &[2.0, 2.0, 1.0, 2.0, 3.0, 4.0]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Matrix {
    pub(crate) storage: Vec<f64>,
}

impl Matrix {
    /// Wraps a packed buffer without validating it
    ///
    /// This is the only way to obtain a malformed matrix, which is useful for
    /// interoperating with producers of the packed layout and for testing
    /// rejection paths.
    ///
    /// # Example
    ///
    /// ```
    /// use dense_matrix::Matrix;
    ///
    /// let garbage = Matrix::from_packed(vec![2.0, 2.0, 0.0, 1.0]);
    /// assert!(!garbage.is_valid());
    /// ```
    pub fn from_packed(storage: Vec<f64>) -> Self {
        Matrix { storage }
    }

    /// Returns the packed buffer, header included
    pub fn as_packed(&self) -> &[f64] {
        &self.storage
    }

    /// Consumes the matrix, returning its packed buffer
    pub fn into_packed(self) -> Vec<f64> {
        self.storage
    }

    /// Returns the cell region of the buffer (everything after the header)
    pub fn cells(&self) -> &[f64] {
        self.storage.get(HEADER_LEN..).unwrap_or(&[])
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [f64] {
        self.storage.get_mut(HEADER_LEN..).unwrap_or(&mut [])
    }

    /// Returns the number of rows
    ///
    /// Reads header position 0, truncated toward zero. A buffer too short to
    /// hold the header reads as 0.
    pub fn rows(&self) -> usize {
        self.storage.first().map_or(0, |&v| v as usize)
    }

    /// Returns the number of columns
    pub fn cols(&self) -> usize {
        self.storage.get(1).map_or(0, |&v| v as usize)
    }

    /// Returns the shape as (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows(), self.cols())
    }

    /// Returns the packed length (`rows * cols + 2` for a valid matrix)
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// True when the buffer holds no cell positions
    pub fn is_empty(&self) -> bool {
        self.storage.len() <= HEADER_LEN
    }

    /// Computes the packed position of cell `(row, col)`
    ///
    /// `row * cols + col + 2`. Pure function of the header, no bounds check.
    ///
    /// # Example
    ///
    /// ```
    /// use dense_matrix::Matrix;
    ///
    /// let m = Matrix::zeros(2, 3);
    /// assert_eq!(m.index_for(1, 1), 6);
    /// ```
    #[inline]
    pub fn index_for(&self, row: usize, col: usize) -> usize {
        row * self.cols() + col + HEADER_LEN
    }

    /// Returns the value at `(row, col)`
    ///
    /// Unchecked tier: the caller guarantees `row < rows()` and
    /// `col < cols()`. An out-of-range column silently reads a neighbouring
    /// cell; a position past the end of the buffer panics.
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> f64 {
        self.storage[self.index_for(row, col)]
    }

    /// Overwrites the value at `(row, col)` in place
    ///
    /// This is the only mutating operation on a matrix. Same precondition as
    /// [`Matrix::at`].
    #[inline]
    pub fn set_at(&mut self, row: usize, col: usize, value: f64) {
        let idx = self.index_for(row, col);
        self.storage[idx] = value;
    }

    /// Returns row `index` as a vector of `cols()` values
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `index >= rows()`
    ///
    /// # Example
    ///
    /// ```
    /// use dense_matrix::Matrix;
    ///
    /// let m = Matrix::build(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    /// assert_eq!(m.get_row(1).unwrap(), vec![3.0, 4.0]);
    /// assert!(m.get_row(2).is_err());
    /// ```
    pub fn get_row(&self, index: usize) -> Result<Vec<f64>> {
        self.get_row_with(index, &MatrixConfig::default())
    }

    /// Same as [`Matrix::get_row`], reporting failures through `config`
    pub fn get_row_with(&self, index: usize, config: &MatrixConfig) -> Result<Vec<f64>> {
        let rows = self.rows();
        if index >= rows {
            return Err(config.fail(MatrixError::IndexOutOfRange { index, rows }));
        }

        let cols = self.cols();
        let range = index
            .checked_mul(cols)
            .and_then(|offset| offset.checked_add(HEADER_LEN))
            .and_then(|start| start.checked_add(cols).map(|end| start..end));
        match range.and_then(|range| self.storage.get(range)) {
            Some(row) => Ok(row.to_vec()),
            // Header claims more rows than the buffer holds
            None => Err(config.fail(MatrixError::IndexOutOfRange {
                index,
                rows: self.cells().len() / self.cols().max(1),
            })),
        }
    }

    /// True if the matrix has cells and its length agrees with its header
    ///
    /// # Example
    ///
    /// ```
    /// use dense_matrix::Matrix;
    ///
    /// assert!(Matrix::zeros(3, 2).is_valid());
    /// assert!(!Matrix::zeros(0, 2).is_valid());
    /// assert!(!Matrix::from_packed(vec![10.0, 10.0, 1.0]).is_valid());
    /// ```
    pub fn is_valid(&self) -> bool {
        let len = self.storage.len();
        if len <= HEADER_LEN {
            return false;
        }
        match self.rows().checked_mul(self.cols()) {
            Some(cells) => cells > 0 && cells == len - HEADER_LEN,
            None => false,
        }
    }

    /// True if both matrices are valid and share the same `(rows, cols)`
    pub fn same_dimensions(&self, other: &Matrix) -> bool {
        self.is_valid() && other.is_valid() && self.shape() == other.shape()
    }

    /// Structural equality, header included, without tolerance
    ///
    /// Does not require validity: two malformed matrices with identical raw
    /// content are equal.
    pub fn equal_to(&self, other: &Matrix) -> bool {
        self == other
    }

    /// Rendering used in error messages
    pub(crate) fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Matrix {
    /// One line per row, cells separated by two tabs:
    ///
    /// ```text
    ///
    /// {		1		2		}
    /// {		3		4		}
    /// ```
    ///
    /// A malformed matrix renders its raw buffer instead.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_valid() {
            write!(f, "<invalid matrix [")?;
            for (i, value) in self.storage.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", value)?;
            }
            return write!(f, "]>");
        }

        writeln!(f)?;
        for i in 0..self.rows() {
            write!(f, "{{\t\t")?;
            for j in 0..self.cols() {
                if j > 0 {
                    write!(f, "\t\t")?;
                }
                write!(f, "{}", self.at(i, j))?;
            }
            writeln!(f, "\t\t}}")?;
        }
        Ok(())
    }
}
