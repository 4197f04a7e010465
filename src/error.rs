//! Error types for the consultant forecast engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The projection arithmetic itself never fails on malformed records; errors
//! only arise from configuration loading, calendar bounds and month keys.

use thiserror::Error;

/// The main error type for the forecast engine.
///
/// # Example
///
/// ```
/// use consultant_forecast::error::ForecastError;
///
/// let error = ForecastError::TaxSettingsNotFound { year: 2031 };
/// assert_eq!(error.to_string(), "No tax settings configured for year 2031");
/// ```
#[derive(Debug, Error)]
pub enum ForecastError {
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

    /// No tax settings exist for the requested year.
    #[error("No tax settings configured for year {year}")]
    TaxSettingsNotFound {
        /// The year that was requested.
        year: i32,
    },

    /// A month index or year could not be mapped onto the calendar.
    #[error("Invalid month index {month_index} for year {year}")]
    InvalidMonth {
        /// The requested year.
        year: i32,
        /// The zero-based month index (valid range 0..=11).
        month_index: u32,
    },

    /// A salary month key was not of the form `YYYY-MM`.
    #[error("Invalid month key '{key}': expected YYYY-MM")]
    InvalidMonthKey {
        /// The offending key.
        key: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

impl ForecastError {
    /// The error raised when decimal arithmetic leaves the representable range.
    pub fn overflow(quantity: &str) -> Self {
        ForecastError::CalculationError {
            message: format!("Decimal overflow while calculating {}", quantity),
        }
    }
}

/// A type alias for Results that return ForecastError.
pub type ForecastResult<T> = Result<T, ForecastError>;
