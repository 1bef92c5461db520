//! Error types for the Billing Calculator.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! [`CalculationError`] covers rejected user input; [`EngineError`] covers
//! configuration problems that happen before any calculation runs.

use thiserror::Error;

use crate::models::NoteType;

/// The reasons a time range can be rejected by the calculator.
///
/// Every variant carries a fixed, human-readable message that is surfaced
/// verbatim to the clinician. None of them are retryable: the calculator is
/// a pure function, so the same input always fails the same way.
///
/// # Example
///
/// ```
/// use billing_calculator::error::CalculationError;
///
/// let error = CalculationError::StartAfterEnd;
/// assert_eq!(error.to_string(), "Start time must be before end time");
/// assert_eq!(error.code(), "START_AFTER_END");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum CalculationError {
    /// The input did not contain exactly one range separator.
    #[error(
        "Invalid format. Use HH:MM-HH:MM or HH:MM to HH:MM, or 12h format \
         (e.g., 09:00-10:30, 09:00 to 10:30, 9:00 AM to 10:30 AM)"
    )]
    InvalidFormat,

    /// One side of the range is not a valid time of day.
    #[error(
        "Invalid time values. Use 24h format (00:00-23:59 or 0000-2359) \
         or 12h format (1:00 AM-11:59 PM, with or without colons)"
    )]
    InvalidTime,

    /// The end time precedes the start time.
    #[error("Start time must be before end time")]
    StartAfterEnd,

    /// The duration is above the note type's billing ceiling.
    #[error("Duration exceeds maximum")]
    DurationTooLong,

    /// A consult duration is under the minimum or matches no table row.
    #[error("Consult notes require a duration that matches the billing table (61-180 minutes)")]
    DurationTooShort,
}

impl CalculationError {
    /// Returns a stable machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            CalculationError::InvalidFormat => "INVALID_FORMAT",
            CalculationError::InvalidTime => "INVALID_TIME",
            CalculationError::StartAfterEnd => "START_AFTER_END",
            CalculationError::DurationTooLong => "DURATION_TOO_LONG",
            CalculationError::DurationTooShort => "DURATION_TOO_SHORT",
        }
    }
}

/// Errors raised while loading or validating calculator configuration.
///
/// # Example
///
/// ```
/// use billing_calculator::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/consult.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/consult.yaml");
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

    /// A billing table failed validation.
    #[error("Invalid {note_type} billing table: {message}")]
    InvalidTable {
        /// The note type whose table is invalid.
        note_type: NoteType,
        /// What made the table invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
