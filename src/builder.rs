//! Matrix construction
//!
//! Zero, identity and random generators, plus [`Matrix::build`] which turns
//! human-readable nested rows into the packed layout:
//!
//! ```
//! use dense_matrix::{Matrix, Row};
//!
//! let rows: Vec<Row> = vec![
//!     vec![10.0, -5.3, 22.0],
//!     vec![-2.0, -25.0, 12.0],
//!     vec![7.0, 5.3],
//! ];
//! let m = Matrix::build(&rows).unwrap();
//!
//! // The short last row is zero-padded
//! assert_eq!(m.at(2, 2), 0.0);
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

use crate::config::MatrixConfig;
use crate::error::{MatrixError, Result};
use crate::matrix::{Matrix, HEADER_LEN};

/// One row of builder input
pub type Row = Vec<f64>;

impl Matrix {
    /// Creates a matrix filled with zeros
    ///
    /// The result is valid whenever both dimensions are non-zero. A zero
    /// dimension yields a header-only matrix that checked operations reject.
    ///
    /// # Example
    ///
    /// ```
    /// use dense_matrix::Matrix;
    ///
    /// let m = Matrix::zeros(3, 10);
    /// assert_eq!(m.shape(), (3, 10));
    /// assert!(m.cells().iter().all(|&v| v == 0.0));
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols + 2` overflows `usize`.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        let len = rows
            .checked_mul(cols)
            .and_then(|cells| cells.checked_add(HEADER_LEN));
        let Some(len) = len else {
            panic!("Matrix dimensions {}x{} overflow the packed length", rows, cols);
        };
        let mut storage = vec![0.0; len];
        storage[0] = rows as f64;
        storage[1] = cols as f64;
        Matrix { storage }
    }

    /// Creates a zero matrix with the same shape as `origin`
    pub fn zeros_like(origin: &Matrix) -> Self {
        Matrix::zeros(origin.rows(), origin.cols())
    }

    /// Creates an identity matrix (square matrix with 1s on diagonal)
    ///
    /// # Example
    ///
    /// ```
    /// use dense_matrix::Matrix;
    ///
    /// let m = Matrix::identity(3);
    /// assert_eq!(m.at(1, 1), 1.0);
    /// assert_eq!(m.at(0, 1), 0.0);
    /// ```
    pub fn identity(n: usize) -> Self {
        let mut m = Matrix::zeros(n, n);
        for i in 0..n {
            m.set_at(i, i, 1.0);
        }
        m
    }

    /// Builds a matrix from a list of rows
    ///
    /// The column count is taken from the first row; shorter rows are padded
    /// with zeros.
    ///
    /// # Errors
    ///
    /// - `InvalidMatrix` if there are no rows or the first row is empty
    /// - `DimensionMismatch` if a row is longer than the first one
    pub fn build<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        Matrix::build_with(rows, &MatrixConfig::default())
    }

    /// Same as [`Matrix::build`], reporting failures through `config`
    pub fn build_with<R: AsRef<[f64]>>(rows: &[R], config: &MatrixConfig) -> Result<Self> {
        let cols = rows.first().map_or(0, |row| row.as_ref().len());
        if cols == 0 {
            return Err(config.fail(MatrixError::InvalidMatrix {
                operation: "Build".to_string(),
                matrix: format!(
                    "with {} row(s) and no columns (use Matrix::zeros for a zero matrix)",
                    rows.len()
                ),
            }));
        }

        let mut result = Matrix::zeros(rows.len(), cols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() > cols {
                return Err(config.fail(MatrixError::DimensionMismatch {
                    operation: "Build".to_string(),
                    left: format!("row {} with {} columns", i, row.len()),
                    right: format!("first row with {} columns", cols),
                }));
            }
            let start = result.index_for(i, 0);
            result.storage[start..start + row.len()].copy_from_slice(row);
        }

        Ok(result)
    }

    /// Creates a matrix of standard-normal samples using the thread RNG
    pub fn random(rows: usize, cols: usize) -> Self {
        Matrix::random_from_rng(rows, cols, &mut rand::thread_rng())
    }

    /// Creates a matrix of standard-normal samples from a seeded RNG
    ///
    /// The same seed always yields the same matrix.
    ///
    /// # Example
    ///
    /// ```
    /// use dense_matrix::Matrix;
    ///
    /// let a = Matrix::random_seeded(2, 2, 42);
    /// let b = Matrix::random_seeded(2, 2, 42);
    /// assert_eq!(a, b);
    /// ```
    pub fn random_seeded(rows: usize, cols: usize, seed: u64) -> Self {
        Matrix::random_from_rng(rows, cols, &mut StdRng::seed_from_u64(seed))
    }

    fn random_from_rng<G: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut G) -> Self {
        let mut m = Matrix::zeros(rows, cols);
        for cell in m.cells_mut() {
            *cell = rng.sample(StandardNormal);
        }
        m
    }
}
