//! Dense real-valued matrices for small neural networks
//!
//! A [`Matrix`] packs its shape and its cells into one `Vec<f64>`:
//! `[rows, cols, cells in row-major order...]`. On top of that layout the
//! crate provides:
//!
//! 1. **Construction** - [`Matrix::build`], [`Matrix::zeros`], [`Matrix::identity`], [`Matrix::random`]
//! 2. **Elementwise engine** - [`Matrix::unary_operation`] and [`Matrix::binary_operation`],
//!    which every cellwise operation (scalar multiply, add, subtract, sigmoid...) delegates to
//! 3. **Linear algebra** - [`Matrix::transpose`], [`Matrix::dot`], [`Matrix::vector_multiply`]
//!
//! Operations never mutate their receiver; each one allocates its result.
//! The only in-place write is [`Matrix::set_at`].
//!
//! # Failure modes
//!
//! Every fallible operation `op` has an `op_with` twin taking a
//! [`MatrixConfig`]. With [`FailureMode::Recoverable`] (the default) a
//! rejected operand is reported as a [`MatrixError`]; with
//! [`FailureMode::Panic`] the same message panics.
//!
//! # Quick Start
//!
//! ```rust
//! use dense_matrix::Matrix;
//!
//! let inputs = Matrix::build(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
//! let weights = Matrix::build(&[vec![10.0, 11.0], vec![12.0, 13.0], vec![14.0, 15.0]]).unwrap();
//!
//! let hidden = inputs.dot(&weights).unwrap();
//! assert_eq!(hidden.get_row(0).unwrap(), vec![76.0, 82.0]);
//!
//! let activated = hidden.sigmoid().unwrap();
//! assert_eq!(activated.shape(), (2, 2));
//! ```

pub mod activation;
pub mod builder;
pub mod config;
pub mod elementwise;
pub mod error;
pub mod linalg;
pub mod matrix;

pub use builder::Row;
pub use config::{FailureMode, MatrixConfig};
pub use error::{MatrixError, Result};
pub use matrix::{Matrix, HEADER_LEN};
