//! Error types for the NZ pay engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the engine, the analyzer and the ledger can report.

use thiserror::Error;

/// The main error type for the NZ pay engine.
///
/// All operations in the crate return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use nz_pay_engine::error::EngineError;
///
/// let error = EngineError::ValidationError {
///     field: "weekly_gross".to_string(),
///     message: "must not be negative".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid input 'weekly_gross': must not be negative");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The jurisdiction configuration parsed but is not internally consistent.
    #[error("Invalid jurisdiction configuration: {message}")]
    ConfigurationError {
        /// A description of the inconsistency.
        message: String,
    },

    /// An input amount, rate or hour count was outside its documented domain.
    #[error("Invalid input '{field}': {message}")]
    ValidationError {
        /// The input that was rejected.
        field: String,
        /// A description of what made the input invalid.
        message: String,
    },

    /// A ledger transaction id did not match any stored transaction.
    #[error("Transaction not found: {id}")]
    TransactionNotFound {
        /// The id that was looked up.
        id: u64,
    },

    /// The ledger file could not be read or written.
    #[error("Ledger storage error at '{path}': {message}")]
    StorageError {
        /// The ledger file path.
        path: String,
        /// A description of the I/O or encoding failure.
        message: String,
    },
}

impl EngineError {
    /// Shorthand for building a [`EngineError::ValidationError`].
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Shorthand for building a [`EngineError::ConfigurationError`].
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError {
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
