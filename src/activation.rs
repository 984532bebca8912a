//! Activation functions

use crate::config::MatrixConfig;
use crate::error::Result;
use crate::matrix::Matrix;

/// Logistic function `1 / (1 + e^-x)`
#[inline]
pub fn logistic(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

impl Matrix {
    /// Applies the sigmoid (logistic) function to every cell
    ///
    /// # Example
    ///
    /// ```
    /// use dense_matrix::Matrix;
    ///
    /// let m = Matrix::build(&[vec![0.0, 100.0]]).unwrap();
    /// let s = m.sigmoid().unwrap();
    /// assert_eq!(s.at(0, 0), 0.5);
    /// ```
    pub fn sigmoid(&self) -> Result<Matrix> {
        self.sigmoid_with(&MatrixConfig::default())
    }

    /// Same as [`Matrix::sigmoid`], reporting failures through `config`
    pub fn sigmoid_with(&self, config: &MatrixConfig) -> Result<Matrix> {
        self.unary_operation_with(logistic, "Sigmoid", config)
    }

    /// Sigmoid slope, `s * (1 - s)` where `s = sigmoid(cell)`
    ///
    /// The sigmoid is applied first and the slope formula is then evaluated
    /// on the activated values, so for a raw input `x` each cell holds
    /// `σ(x) · (1 − σ(x))`.
    pub fn sigmoid_derivative(&self) -> Result<Matrix> {
        self.sigmoid_derivative_with(&MatrixConfig::default())
    }

    /// Same as [`Matrix::sigmoid_derivative`], reporting failures through `config`
    pub fn sigmoid_derivative_with(&self, config: &MatrixConfig) -> Result<Matrix> {
        self.sigmoid_with(config)?
            .unary_operation_with(|s| s * (1.0 - s), "SigmoidDerivative", config)
    }
}
