//! Transpose, matrix product and matrix–vector product
//!
//! These permute or contract indices, so they are written directly against
//! the unchecked accessors instead of going through the elementwise engine.

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::config::MatrixConfig;
use crate::error::{MatrixError, Result};
use crate::matrix::{Matrix, HEADER_LEN};

impl Matrix {
    /// Transpose the matrix (swap rows and columns)
    ///
    /// Returns a new matrix where element `(i, j)` of the original becomes
    /// element `(j, i)` in the result.
    ///
    /// # Errors
    ///
    /// Returns `InvalidMatrix` if the matrix is not valid
    ///
    /// # Example
    ///
    /// ```
    /// use dense_matrix::Matrix;
    ///
    /// let m = Matrix::build(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
    /// let t = m.transpose().unwrap();
    ///
    /// // [[1, 2, 3],     [[1, 4],
    /// //  [4, 5, 6]]  →   [2, 5],
    /// //                  [3, 6]]
    /// assert_eq!(t.shape(), (3, 2));
    /// assert_eq!(t.at(0, 1), 4.0);
    /// assert_eq!(t.at(2, 0), 3.0);
    /// ```
    pub fn transpose(&self) -> Result<Matrix> {
        self.transpose_with(&MatrixConfig::default())
    }

    /// Same as [`Matrix::transpose`], reporting failures through `config`
    #[cfg_attr(feature = "tracing", instrument(skip(self, config), fields(dims = %format!("{}x{}", self.rows(), self.cols()))))]
    pub fn transpose_with(&self, config: &MatrixConfig) -> Result<Matrix> {
        if !self.is_valid() {
            return Err(config.fail(MatrixError::InvalidMatrix {
                operation: "Transpose".to_string(),
                matrix: self.describe(),
            }));
        }

        let (rows, cols) = self.shape();
        let mut result = Matrix::zeros(cols, rows);
        for i in 0..cols {
            for j in 0..rows {
                result.set_at(i, j, self.at(j, i));
            }
        }

        Ok(result)
    }

    /// Matrix multiplication
    ///
    /// Computes `C = A × B` where A is `m×n`, B is `n×p`, and C is `m×p`:
    ///
    /// ```text
    /// C[i,j] = Σ(k=0 to n-1) A[i,k] × B[k,j]
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `InvalidMatrix` if either operand is not valid, and
    /// `DimensionMismatch` if `self.cols() != other.rows()`
    ///
    /// # Example
    ///
    /// ```
    /// use dense_matrix::Matrix;
    ///
    /// let a = Matrix::build(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
    /// let b = Matrix::build(&[vec![10.0, 11.0], vec![12.0, 13.0], vec![14.0, 15.0]]).unwrap();
    /// let c = a.dot(&b).unwrap();
    ///
    /// assert_eq!(c, Matrix::build(&[vec![76.0, 82.0], vec![184.0, 199.0]]).unwrap());
    /// ```
    pub fn dot(&self, other: &Matrix) -> Result<Matrix> {
        self.dot_with(other, &MatrixConfig::default())
    }

    /// Same as [`Matrix::dot`], reporting failures through `config`
    #[cfg_attr(feature = "tracing", instrument(skip(self, other, config), fields(dims = %format!("{}x{} @ {}x{}", self.rows(), self.cols(), other.rows(), other.cols()))))]
    pub fn dot_with(&self, other: &Matrix, config: &MatrixConfig) -> Result<Matrix> {
        for operand in [self, other] {
            if !operand.is_valid() {
                return Err(config.fail(MatrixError::InvalidMatrix {
                    operation: "Dot".to_string(),
                    matrix: operand.describe(),
                }));
            }
        }

        if self.cols() != other.rows() {
            return Err(config.fail(MatrixError::DimensionMismatch {
                operation: "Dot".to_string(),
                left: self.describe(),
                right: other.describe(),
            }));
        }

        let inner = self.cols();
        let mut result = Matrix::zeros(self.rows(), other.cols());
        for i in 0..result.rows() {
            for j in 0..result.cols() {
                let mut sum = 0.0;
                for k in 0..inner {
                    sum += self.at(i, k) * other.at(k, j);
                }
                result.set_at(i, j, sum);
            }
        }

        Ok(result)
    }

    /// Matrix-vector multiplication (column vector): A × v
    ///
    /// The vector is lifted into a single-column matrix, multiplied with
    /// [`Matrix::dot`], and the single-column result flattened back.
    ///
    /// # Errors
    ///
    /// Returns `InvalidMatrix` if the matrix is not valid, and
    /// `DimensionMismatch` if `vector.len() != self.cols()`
    ///
    /// # Example
    ///
    /// ```
    /// use dense_matrix::Matrix;
    ///
    /// let m = Matrix::build(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
    /// assert_eq!(m.vector_multiply(&[7.0, 8.0, 9.0]).unwrap(), vec![50.0, 122.0]);
    /// ```
    pub fn vector_multiply(&self, vector: &[f64]) -> Result<Vec<f64>> {
        self.vector_multiply_with(vector, &MatrixConfig::default())
    }

    /// Same as [`Matrix::vector_multiply`], reporting failures through `config`
    #[cfg_attr(feature = "tracing", instrument(skip(self, vector, config), fields(dims = %format!("{}x{} @ {}", self.rows(), self.cols(), vector.len()))))]
    pub fn vector_multiply_with(&self, vector: &[f64], config: &MatrixConfig) -> Result<Vec<f64>> {
        if !self.is_valid() {
            return Err(config.fail(MatrixError::InvalidMatrix {
                operation: "VectorMultiply".to_string(),
                matrix: self.describe(),
            }));
        }

        if vector.len() != self.cols() {
            return Err(config.fail(MatrixError::DimensionMismatch {
                operation: "VectorMultiply".to_string(),
                left: self.describe(),
                right: format!("vector of length {} {:?}", vector.len(), vector),
            }));
        }

        let mut column = Matrix::zeros(vector.len(), 1);
        column.cells_mut().copy_from_slice(vector);

        Ok(self.dot_with(&column, config)?.into_cells())
    }

    fn into_cells(self) -> Vec<f64> {
        let mut storage = self.storage;
        storage.split_off(HEADER_LEN.min(storage.len()))
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn matrix_strategy() -> impl Strategy<Value = Matrix> {
        (1usize..10, 1usize..10).prop_flat_map(|(rows, cols)| {
            proptest::collection::vec(-100.0f64..100.0, rows * cols).prop_map(move |data| {
                let rows: Vec<&[f64]> = data.chunks(cols).collect();
                Matrix::build(&rows).unwrap()
            })
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: transpose is an involution
        #[test]
        fn test_transpose_round_trip(m in matrix_strategy()) {
            let back = m.transpose().unwrap().transpose().unwrap();
            prop_assert!(back.equal_to(&m));
        }

        /// Property: multiplying by the conformant identity preserves the matrix
        #[test]
        fn test_dot_identity_property(m in matrix_strategy()) {
            let result = m.dot(&Matrix::identity(m.cols())).unwrap();
            prop_assert!(result.equal_to(&m));
        }

        /// Property: (A × B)ᵀ == Bᵀ × Aᵀ
        #[test]
        fn test_dot_transpose_law(a in matrix_strategy(), p in 1usize..6, seed in any::<u64>()) {
            let b = Matrix::random_seeded(a.cols(), p, seed);
            let left = a.dot(&b).unwrap().transpose().unwrap();
            let right = b.transpose().unwrap().dot(&a.transpose().unwrap()).unwrap();
            prop_assert_eq!(left.shape(), right.shape());
            for (x, y) in left.cells().iter().zip(right.cells()) {
                prop_assert!((x - y).abs() < 1e-9);
            }
        }
    }
}
