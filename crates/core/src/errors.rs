//! Core error types for the Moneta application.
//!
//! This module defines database-agnostic error types. Storage-specific errors
//! (from Diesel, SQLite, etc.) are converted to these types by the storage layer.

use chrono::ParseError as ChronoParseError;
use thiserror::Error;

use crate::fx::FxError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the application.
///
/// Database-specific errors are carried in string form to keep this type
/// database-agnostic.
#[derive(Error, Debug)]
pub enum Error {
    /// The durable store could not be opened or a read/write failed.
    /// Always propagated on write paths; read paths for the singletons
    /// may fall back to defaults only on `NotFound`, never on this.
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// A single-record lookup missed.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// A unique or foreign-key constraint was violated.
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// A backup payload is missing required top-level keys or is not
    /// parseable; the whole import is rejected, nothing is applied.
    #[error("Invalid backup format: {0}")]
    InvalidBackupFormat(String),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Fx error: {0}")]
    Fx(#[from] FxError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Failed to parse date/time: {0}")]
    DateTimeParse(#[from] ChronoParseError),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateTimeParse(err))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
