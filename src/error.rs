//! Error types for the duty roster engine.
//!
//! The roster pipeline itself is infallible once it has a valid
//! [`PayrollPeriod`](crate::models::PayrollPeriod); these errors come from the
//! boundaries around it: configuration loading, period construction and
//! override validation.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the duty roster engine.
///
/// # Example
///
/// ```
/// use duty_roster::error::EngineError;
///
/// let error = EngineError::InvalidPeriod {
///     year: 2026,
///     month: 13,
///     message: "month must be between 1 and 12".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid payroll period 2026-13: month must be between 1 and 12"
/// );
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

    /// The requested target year/month does not describe a usable period.
    #[error("Invalid payroll period {year}-{month}: {message}")]
    InvalidPeriod {
        /// The target year.
        year: i32,
        /// The target month (1-12).
        month: u32,
        /// Why the period was rejected.
        message: String,
    },

    /// An override request was malformed.
    #[error("Invalid override for staff '{staff_id}' on {date}: {message}")]
    InvalidOverride {
        /// The staff id the override refers to.
        staff_id: String,
        /// The date the override refers to.
        date: NaiveDate,
        /// What made the override invalid.
        message: String,
    },

    /// Two staff records share the same id.
    #[error("Duplicate staff id: {id}")]
    DuplicateStaff {
        /// The repeated id.
        id: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
