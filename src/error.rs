//! Error types for the work-day engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while calculating work-day hours
//! and managing bookings.

use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

/// The main error type for the work-day engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use workday_engine::error::EngineError;
///
/// let error = EngineError::InvalidTime {
///     value: "25:00".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid clock time '25:00': expected HH:MM");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A clock time was not of the form `HH:MM` with hours 00-23 and minutes 00-59.
    #[error("Invalid clock time '{value}': expected HH:MM")]
    InvalidTime {
        /// The rejected input.
        value: String,
    },

    /// A date range ended before it started.
    #[error("Invalid date range: {end} is before {start}")]
    InvalidDateRange {
        /// The first day of the range.
        start: NaiveDate,
        /// The last day of the range.
        end: NaiveDate,
    },

    /// No booking exists with the given ID.
    #[error("Booking not found: {id}")]
    BookingNotFound {
        /// The booking ID that was not found.
        id: Uuid,
    },

    /// The booking has no vehicle period with the given ID.
    #[error("Vehicle period {period_id} not found in booking {booking_id}")]
    PeriodNotFound {
        /// The booking that was searched.
        booking_id: Uuid,
        /// The vehicle period ID that was not found.
        period_id: Uuid,
    },

    /// The vehicle period has no work day for the given date.
    #[error("No work day on {date} in vehicle period {period_id}")]
    WorkDayNotFound {
        /// The vehicle period that was searched.
        period_id: Uuid,
        /// The requested date.
        date: NaiveDate,
    },

    /// A pending edit no longer matches the stored work day.
    #[error("Work day on {date} in vehicle period {period_id} changed since the edit was proposed")]
    StaleEdit {
        /// The vehicle period holding the work day.
        period_id: Uuid,
        /// The date of the work day.
        date: NaiveDate,
    },

    /// The configuration has no entry for a daily service type.
    #[error("Service type not configured: {daily_type}")]
    ServiceTypeNotConfigured {
        /// The daily type that has no configuration entry.
        daily_type: String,
    },

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

    /// A repository could not read or write its backing store.
    #[error("Storage error at '{location}': {message}")]
    Storage {
        /// The store location (file path or store name).
        location: String,
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
