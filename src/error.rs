//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while costing shifts and
//! apportioning sick leave.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the payroll engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::InvalidTime {
///     value: "25:00".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid time of day '25:00': expected HH:MM");
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

    /// A time-of-day string was not parseable as `HH:MM`.
    #[error("Invalid time of day '{value}': expected HH:MM")]
    InvalidTime {
        /// The rejected input.
        value: String,
    },

    /// A shift was invalid or contained inconsistent data.
    #[error("Invalid shift '{shift_id}': {message}")]
    InvalidShift {
        /// The ID of the invalid shift.
        shift_id: String,
        /// A description of what made the shift invalid.
        message: String,
    },

    /// A sick-leave span was invalid or contained inconsistent data.
    #[error("Invalid sick leave for employee '{employee_id}': {message}")]
    InvalidSickLeave {
        /// The employee the span belongs to.
        employee_id: String,
        /// A description of what made the span invalid.
        message: String,
    },

    /// A payroll period ended before it started.
    #[error("Invalid payroll period: {start} is after {end}")]
    InvalidPeriod {
        /// The first day of the period.
        start: NaiveDate,
        /// The last day of the period.
        end: NaiveDate,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

impl EngineError {
    /// A [`EngineError::CalculationError`] for an amount that does not fit
    /// in a `Decimal`.
    pub fn overflow(what: impl std::fmt::Display) -> Self {
        EngineError::CalculationError {
            message: format!("{what} overflows"),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
