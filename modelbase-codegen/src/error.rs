//! Error types for modelbase-codegen

use thiserror::Error;

/// Result type alias for modelbase-codegen operations
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Errors that can occur during code generation.
///
/// All of these are terminal for the run: generation either produces one
/// complete artifact or returns an error and writes nothing.
#[derive(Error, Debug)]
pub enum CodegenError {
    #[error("Failed to parse SQL schema: {0}")]
    ParseError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Table not found in schema source: {0}")]
    TableNotFound(String),

    #[error("Unsupported column type: {0}")]
    UnsupportedColumnType(String),

    #[error("No marshaling kind for semantic type: {0}")]
    UnsupportedMarshalType(String),

    #[error("Table `{table}` has no primary key column")]
    MissingPrimaryKey { table: String },

    #[error("Table `{table}` has more than one primary key column")]
    CompositePrimaryKey { table: String },
}

impl From<sqlparser::parser::ParserError> for CodegenError {
    fn from(err: sqlparser::parser::ParserError) -> Self {
        CodegenError::ParseError(err.to_string())
    }
}

impl From<config::ConfigError> for CodegenError {
    fn from(err: config::ConfigError) -> Self {
        CodegenError::ConfigError(err.to_string())
    }
}
