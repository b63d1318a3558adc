//! Custom error types for Spendlens
//!
//! The analytics core raises exactly one error, [`SpendlensError::InvalidRange`].
//! The remaining variants belong to the shell around it: settings, the
//! transaction file, exports and CLI argument parsing.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for Spendlens operations
#[derive(Error, Debug)]
pub enum SpendlensError {
    /// A date interval whose start lies after its end
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models and user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Transaction file errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl SpendlensError {
    /// Create an invalid range error
    pub fn invalid_range(start: NaiveDate, end: NaiveDate) -> Self {
        Self::InvalidRange { start, end }
    }

    /// Check if this is an invalid range error
    pub fn is_invalid_range(&self) -> bool {
        matches!(self, Self::InvalidRange { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for SpendlensError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SpendlensError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Spendlens operations
pub type SpendlensResult<T> = Result<T, SpendlensError>;
