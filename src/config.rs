//! Failure-mode configuration
//!
//! Every fallible matrix operation has a `*_with` variant taking a
//! [`MatrixConfig`]. The configuration decides what happens when an operation
//! rejects its operands: the error is either handed back to the caller, or it
//! aborts the call chain with a panic carrying the same message.
//!
//! The configuration is a plain value. Nothing is stored process-wide, so two
//! threads can run the same operation under different modes.
//!
//! # Examples
//!
//! ```
//! use dense_matrix::config::{FailureMode, MatrixConfig};
//!
//! // Default: errors are returned
//! let lenient = MatrixConfig::default();
//! assert_eq!(lenient.failure_mode, FailureMode::Recoverable);
//!
//! // Panic on the first rejected operand
//! let strict = MatrixConfig::new()
//!     .with_failure_mode(FailureMode::Panic)
//!     .build();
//! assert!(strict.panics());
//! ```

use crate::error::MatrixError;

/// Environment variable read by [`MatrixConfig::from_env`]
pub const FAILURE_MODE_ENV: &str = "DENSE_MATRIX_FAILURE_MODE";

/// What an operation does when its preconditions are violated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FailureMode {
    /// Return the error to the caller
    #[default]
    Recoverable,
    /// Panic with the error message
    Panic,
}

impl FailureMode {
    /// Parse a mode name, as accepted by [`MatrixConfig::from_env`]
    ///
    /// `panic`, `debug`, `1` and `true` (any case) select [`FailureMode::Panic`];
    /// anything else selects [`FailureMode::Recoverable`].
    ///
    /// # Examples
    ///
    /// ```
    /// use dense_matrix::config::FailureMode;
    ///
    /// assert_eq!(FailureMode::parse("PANIC"), FailureMode::Panic);
    /// assert_eq!(FailureMode::parse("off"), FailureMode::Recoverable);
    /// ```
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "panic" | "debug" | "1" | "true" => FailureMode::Panic,
            _ => FailureMode::Recoverable,
        }
    }
}

/// Per-call configuration for matrix operations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatrixConfig {
    /// How rejected operands are reported
    pub failure_mode: FailureMode,
}

impl MatrixConfig {
    /// Create a configuration with default values (errors are returned)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the failure mode
    ///
    /// # Examples
    ///
    /// ```
    /// use dense_matrix::config::{FailureMode, MatrixConfig};
    ///
    /// let config = MatrixConfig::new().with_failure_mode(FailureMode::Panic);
    /// assert_eq!(config.failure_mode, FailureMode::Panic);
    /// ```
    pub fn with_failure_mode(mut self, mode: FailureMode) -> Self {
        self.failure_mode = mode;
        self
    }

    /// Finalize configuration (no-op, for builder pattern consistency)
    pub fn build(self) -> Self {
        self
    }

    /// Preset returning every error to the caller
    pub fn recoverable() -> Self {
        Self::new().with_failure_mode(FailureMode::Recoverable)
    }

    /// Preset turning every error into a panic
    ///
    /// Meant for debugging a network: the panic points at the first operation
    /// that received a malformed or mismatched operand.
    pub fn panicking() -> Self {
        Self::new().with_failure_mode(FailureMode::Panic)
    }

    /// Build a configuration from `DENSE_MATRIX_FAILURE_MODE`
    ///
    /// The variable is read once, here. Unset or unrecognised values fall back
    /// to [`FailureMode::Recoverable`].
    pub fn from_env() -> Self {
        let mode = std::env::var(FAILURE_MODE_ENV)
            .map(|value| FailureMode::parse(&value))
            .unwrap_or_default();
        Self::new().with_failure_mode(mode)
    }

    /// True when rejected operands panic instead of returning an error
    pub fn panics(&self) -> bool {
        self.failure_mode == FailureMode::Panic
    }

    /// Report a rejected operation
    ///
    /// Returns the error unchanged so callers can write
    /// `return Err(config.fail(err))`.
    ///
    /// # Panics
    ///
    /// Panics with the error message when the failure mode is
    /// [`FailureMode::Panic`].
    pub fn fail(&self, err: MatrixError) -> MatrixError {
        #[cfg(feature = "tracing")]
        tracing::warn!(mode = ?self.failure_mode, error = %err, "matrix operation rejected");

        if self.panics() {
            panic!("{}", err);
        }
        err
    }
}
