//! Error types for modelbase

use thiserror::Error;

/// Result type alias for modelbase operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur inside generated models and the query seam
#[derive(Error, Debug)]
pub enum Error {
    /// A non-nullable column was given an absent value
    #[error("Column `{column}` can not be null")]
    NullConstraintViolation { column: String },

    /// Type conversion error
    #[error("Type conversion error: expected {expected}, got {actual}")]
    TypeConversion {
        expected: &'static str,
        actual: String,
    },

    /// Column not found in row
    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    /// Failure reported by the executor implementation
    #[error("Execution error: {0}")]
    Execution(String),
}
