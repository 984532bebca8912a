//! Elementwise operation engine
//!
//! Every cellwise operation in the crate is a specialization of
//! [`Matrix::unary_operation_with`] or [`Matrix::binary_operation_with`]. Both
//! validate their operands, allocate a zero matrix of the same shape and fill
//! its cells. Header positions are copied, never passed through the function.
//!
//! New operations can be added from outside the crate the same way:
//!
//! ```
//! use dense_matrix::Matrix;
//!
//! let m = Matrix::build(&[vec![-1.0, 2.0], vec![3.0, -4.0]]).unwrap();
//! let relu = m.unary_operation(|x| x.max(0.0), "ReLU").unwrap();
//! assert_eq!(relu.cells(), &[0.0, 2.0, 3.0, 0.0]);
//! ```

use crate::config::MatrixConfig;
use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;

impl Matrix {
    /// Produces a new matrix by applying `operation` to every cell
    ///
    /// `label` names the operation in error messages.
    ///
    /// # Errors
    ///
    /// Returns `InvalidMatrix` if the matrix is not valid
    pub fn unary_operation<F>(&self, operation: F, label: &str) -> Result<Matrix>
    where
        F: Fn(f64) -> f64,
    {
        self.unary_operation_with(operation, label, &MatrixConfig::default())
    }

    /// Same as [`Matrix::unary_operation`], reporting failures through `config`
    pub fn unary_operation_with<F>(
        &self,
        operation: F,
        label: &str,
        config: &MatrixConfig,
    ) -> Result<Matrix>
    where
        F: Fn(f64) -> f64,
    {
        if !self.is_valid() {
            return Err(config.fail(MatrixError::InvalidMatrix {
                operation: label.to_string(),
                matrix: self.describe(),
            }));
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(operation = label, rows = self.rows(), cols = self.cols(), "unary operation");

        let mut result = Matrix::zeros_like(self);
        for (out, &value) in result.cells_mut().iter_mut().zip(self.cells()) {
            *out = operation(value);
        }

        Ok(result)
    }

    /// Produces a new matrix by applying `operation` to each pair of cells
    /// at the same position in `self` and `other`
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if either matrix is invalid or their
    /// shapes differ
    pub fn binary_operation<F>(&self, other: &Matrix, operation: F, label: &str) -> Result<Matrix>
    where
        F: Fn(f64, f64) -> f64,
    {
        self.binary_operation_with(other, operation, label, &MatrixConfig::default())
    }

    /// Same as [`Matrix::binary_operation`], reporting failures through `config`
    pub fn binary_operation_with<F>(
        &self,
        other: &Matrix,
        operation: F,
        label: &str,
        config: &MatrixConfig,
    ) -> Result<Matrix>
    where
        F: Fn(f64, f64) -> f64,
    {
        if !self.same_dimensions(other) {
            return Err(config.fail(MatrixError::DimensionMismatch {
                operation: label.to_string(),
                left: self.describe(),
                right: other.describe(),
            }));
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(operation = label, rows = self.rows(), cols = self.cols(), "binary operation");

        let mut result = Matrix::zeros_like(self);
        for ((out, &a), &b) in result
            .cells_mut()
            .iter_mut()
            .zip(self.cells())
            .zip(other.cells())
        {
            *out = operation(a, b);
        }

        Ok(result)
    }

    /// Multiplies every cell by `scalar`
    ///
    /// # Example
    ///
    /// ```
    /// use dense_matrix::Matrix;
    ///
    /// let m = Matrix::build(&[vec![1.0, 2.0]]).unwrap();
    /// assert_eq!(m.scalar_multiply(3.0).unwrap().cells(), &[3.0, 6.0]);
    /// ```
    pub fn scalar_multiply(&self, scalar: f64) -> Result<Matrix> {
        self.scalar_multiply_with(scalar, &MatrixConfig::default())
    }

    /// Same as [`Matrix::scalar_multiply`], reporting failures through `config`
    pub fn scalar_multiply_with(&self, scalar: f64, config: &MatrixConfig) -> Result<Matrix> {
        self.unary_operation_with(|value| value * scalar, "ScalarMultiply", config)
    }

    /// Multiplies cells at the same position (Hadamard product)
    ///
    /// This is *not* the matrix product; see [`Matrix::dot`] for that.
    pub fn multiply_cells(&self, other: &Matrix) -> Result<Matrix> {
        self.multiply_cells_with(other, &MatrixConfig::default())
    }

    /// Same as [`Matrix::multiply_cells`], reporting failures through `config`
    pub fn multiply_cells_with(&self, other: &Matrix, config: &MatrixConfig) -> Result<Matrix> {
        self.binary_operation_with(other, |a, b| a * b, "MultiplyCells", config)
    }

    /// Element-wise addition
    ///
    /// # Example
    ///
    /// ```
    /// use dense_matrix::Matrix;
    ///
    /// let a = Matrix::build(&[vec![1.0, 2.0]]).unwrap();
    /// let b = Matrix::build(&[vec![10.0, 20.0]]).unwrap();
    /// assert_eq!(a.add(&b).unwrap().cells(), &[11.0, 22.0]);
    /// ```
    pub fn add(&self, other: &Matrix) -> Result<Matrix> {
        self.add_with(other, &MatrixConfig::default())
    }

    /// Same as [`Matrix::add`], reporting failures through `config`
    pub fn add_with(&self, other: &Matrix, config: &MatrixConfig) -> Result<Matrix> {
        self.binary_operation_with(other, |a, b| a + b, "Add", config)
    }

    /// Element-wise subtraction (`self - other`)
    pub fn subtract(&self, other: &Matrix) -> Result<Matrix> {
        self.subtract_with(other, &MatrixConfig::default())
    }

    /// Same as [`Matrix::subtract`], reporting failures through `config`
    pub fn subtract_with(&self, other: &Matrix, config: &MatrixConfig) -> Result<Matrix> {
        self.binary_operation_with(other, |a, b| a - b, "Subtract", config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ones(rows: usize, cols: usize) -> Matrix {
        Matrix::zeros(rows, cols).unary_operation(|_| 1.0, "Ones").unwrap()
    }

    #[test]
    fn test_unary_leaves_header_alone() {
        let m = Matrix::build(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        let result = m.unary_operation(|_| 100.0, "Const").unwrap();
        assert_eq!(result.shape(), (2, 3));
        assert_eq!(&result.as_packed()[..2], &[2.0, 3.0]);
        assert!(result.cells().iter().all(|&v| v == 100.0));
    }

    #[test]
    fn test_unary_does_not_touch_input() {
        let m = Matrix::build(&[vec![1.0, 2.0]]).unwrap();
        let before = m.clone();
        let _ = m.unary_operation(|x| x * 10.0, "Scale").unwrap();
        assert_eq!(m, before);
    }

    #[test]
    fn test_unary_invalid_matrix() {
        let m = Matrix::from_packed(vec![10.0, 10.0, 1.0]);
        let err = m.unary_operation(|x| x, "Identity").unwrap_err();
        assert_eq!(
            err,
            MatrixError::InvalidMatrix {
                operation: "Identity".to_string(),
                matrix: "<invalid matrix [10, 10, 1]>".to_string(),
            }
        );
    }

    #[test]
    fn test_binary_pairs_positions() {
        let a = Matrix::build(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let b = Matrix::build(&[vec![10.0, 20.0], vec![30.0, 40.0]]).unwrap();
        let result = a.binary_operation(&b, |x, y| y - x, "Diff").unwrap();
        assert_eq!(result.cells(), &[9.0, 18.0, 27.0, 36.0]);
    }

    #[test]
    fn test_binary_dimension_mismatch() {
        let a = Matrix::zeros(2, 3);
        let b = Matrix::zeros(3, 2);
        let err = a.add(&b).unwrap_err();
        assert_eq!(err.operation(), Some("Add"));
        assert!(matches!(err, MatrixError::DimensionMismatch { .. }));
    }

    #[test]
    fn test_binary_rejects_invalid_operands() {
        let garbage = Matrix::from_packed(vec![1.0, 1.0]);
        assert!(garbage.add(&garbage.clone()).is_err());
    }

    #[test]
    fn test_scalar_multiply() {
        let m = ones(3, 3).scalar_multiply(2.0).unwrap();
        for i in 0..m.rows() {
            for j in 0..m.cols() {
                assert_eq!(m.at(i, j), 2.0);
            }
        }
    }

    #[test]
    fn test_scalar_multiply_invalid() {
        let m = Matrix::from_packed(vec![10.0, 10.0, 1.0]);
        assert!(m.scalar_multiply(2.0).is_err());
    }

    #[test]
    fn test_multiply_cells() {
        let a = Matrix::build(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        let b = Matrix::build(&[vec![2.0, 2.0, 2.0], vec![0.5, 0.5, -1.0]]).unwrap();
        let result = a.multiply_cells(&b).unwrap();
        assert_eq!(result.cells(), &[2.0, 4.0, 6.0, 2.0, 2.5, -6.0]);
    }

    #[test]
    fn test_multiply_cells_mismatch() {
        assert!(ones(2, 2).multiply_cells(&ones(2, 3)).is_err());
    }

    #[test]
    fn test_add() {
        let a = Matrix::build(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        let b = Matrix::build(&[vec![6.0, 5.0, 4.0], vec![3.0, 2.0, 1.0]]).unwrap();
        let result = a.add(&b).unwrap();
        assert!(result.cells().iter().all(|&v| v == 7.0));
    }

    #[test]
    fn test_subtract() {
        let a = Matrix::build(&[vec![5.0, 5.0], vec![5.0, 5.0]]).unwrap();
        let b = Matrix::build(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let result = a.subtract(&b).unwrap();
        assert_eq!(result.cells(), &[4.0, 3.0, 2.0, 1.0]);
    }

    #[test]
    fn test_subtract_mismatch() {
        let err = ones(1, 2).subtract(&ones(2, 1)).unwrap_err();
        assert_eq!(err.operation(), Some("Subtract"));
    }

    #[test]
    #[should_panic(expected = "Can't apply operation \"Add\" on matrices")]
    fn test_add_panics_in_panic_mode() {
        let _ = ones(2, 2).add_with(&ones(3, 3), &MatrixConfig::panicking());
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn matrix_strategy(rows: usize, cols: usize) -> impl Strategy<Value = Matrix> {
        proptest::collection::vec(-1000.0f64..1000.0, rows * cols).prop_map(move |data| {
            let mut m = Matrix::zeros(rows, cols);
            m.storage[2..].copy_from_slice(&data);
            m
        })
    }

    fn shaped_pair() -> impl Strategy<Value = (Matrix, Matrix)> {
        (1usize..8, 1usize..8)
            .prop_flat_map(|(r, c)| (matrix_strategy(r, c), matrix_strategy(r, c)))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: (A + B) - B == A
        #[test]
        fn test_add_subtract_inverse((a, b) in shaped_pair()) {
            let back = a.add(&b).unwrap().subtract(&b).unwrap();
            prop_assert_eq!(back.shape(), a.shape());
            for (x, y) in back.cells().iter().zip(a.cells()) {
                prop_assert!((x - y).abs() < 1e-9, "{} != {}", x, y);
            }
        }

        /// Property: A * 1 == A exactly, A * 0 == zeros exactly
        #[test]
        fn test_scalar_identity_and_zero(a in (1usize..8, 1usize..8).prop_flat_map(|(r, c)| matrix_strategy(r, c))) {
            prop_assert!(a.scalar_multiply(1.0).unwrap().equal_to(&a));
            prop_assert!(a.scalar_multiply(0.0).unwrap().equal_to(&Matrix::zeros_like(&a)));
        }

        /// Property: addition commutes exactly
        #[test]
        fn test_add_commutative((a, b) in shaped_pair()) {
            prop_assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
        }
    }
}
