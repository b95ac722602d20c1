//! Error types for greenlight.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for greenlight operations.
///
/// Each variant maps to a specific exit code. An empty diff is not an error.
#[derive(Error, Debug)]
pub enum GreenlightError {
    /// User provided invalid arguments or unreadable input.
    #[error("{0}")]
    UserError(String),

    /// Configuration file could not be read or is invalid.
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// Input text is not recognizable as a unified diff.
    #[error("Failed to parse diff: {0}")]
    ParseError(String),
}

impl GreenlightError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            GreenlightError::UserError(_) => exit_codes::USER_ERROR,
            GreenlightError::ConfigError(_) => exit_codes::USER_ERROR,
            GreenlightError::ParseError(_) => exit_codes::PARSE_FAILURE,
        }
    }
}

/// Result type alias for greenlight operations.
pub type Result<T> = std::result::Result<T, GreenlightError>;
