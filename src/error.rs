//! Error types for matrix operations

use thiserror::Error;

/// Result type for matrix operations
pub type Result<T> = std::result::Result<T, MatrixError>;

/// Errors that can occur during matrix operations
///
/// Operand fields hold the textual rendering of the offending matrices so the
/// message is self-contained once the operands are dropped.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MatrixError {
    /// Operand is empty or its header disagrees with its length
    #[error("Can't apply operation \"{operation}\" on matrix {matrix}: matrix is not valid")]
    InvalidMatrix {
        /// Name of the operation that rejected the operand
        operation: String,
        /// Rendering of the operand
        matrix: String,
    },

    /// Operands do not have the shapes the operation requires
    #[error("Can't apply operation \"{operation}\" on matrices: {left} is not the same dimension than {right}")]
    DimensionMismatch {
        /// Name of the operation that rejected the operands
        operation: String,
        /// Rendering of the left operand
        left: String,
        /// Rendering of the right operand
        right: String,
    },

    /// Requested row does not exist
    #[error("Row {index} is out of matrix ({rows} rows)")]
    IndexOutOfRange {
        /// Requested row index
        index: usize,
        /// Row count of the matrix
        rows: usize,
    },
}

impl MatrixError {
    /// Name of the operation that produced the error, if any
    pub fn operation(&self) -> Option<&str> {
        match self {
            MatrixError::InvalidMatrix { operation, .. }
            | MatrixError::DimensionMismatch { operation, .. } => Some(operation),
            MatrixError::IndexOutOfRange { .. } => None,
        }
    }
}
