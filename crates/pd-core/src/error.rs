//! Error types for probdist

use thiserror::Error;

/// probdist error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Not enough observations for the requested statistic
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// A normalized quantity was requested from a zero-width distribution
    #[error("Division by zero: {0}")]
    DivisionByZero(String),

    /// Discrete mass queried outside its support
    #[error("Invalid outcome: {0}")]
    InvalidOutcome(String),

    /// Operation does not apply to this distribution variant
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
