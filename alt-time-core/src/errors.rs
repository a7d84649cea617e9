//! Error types for calendar conversions.
//!
//! This module provides a unified error type [`AltTimeError`] that covers the failure
//! modes encountered while converting instants between calendars: malformed input,
//! calendar fields that do not exist, integer overflow at the edges of the
//! representable range, internal consistency failures, and unreadable settings.
//!
//! # Error Categories
//!
//! | Variant | Use Case | Recoverable? |
//! |---------|----------|--------------|
//! | [`ParseError`](AltTimeError::ParseError) | Unparseable date strings and timestamps | No |
//! | [`InvalidDate`](AltTimeError::InvalidDate) | Calendar fields that do not exist | No |
//! | [`MathError`](AltTimeError::MathError) | Overflow at the ends of the `i64` range | No |
//! | [`CalculationError`](AltTimeError::CalculationError) | Broken registry or cycle invariants | No |
//! | [`ConfigError`](AltTimeError::ConfigError) | Settings file I/O or validation | Yes |
//!
//! # Usage
//!
//! Most functions return [`AltTimeResult<T>`], which is `Result<T, AltTimeError>`.
//! Use the constructor methods for consistent error creation:
//!
//! ```
//! use alt_time_core::{AltTimeError, MathErrorKind};
//!
//! fn shift(seconds: i64, by: i64) -> Result<i64, AltTimeError> {
//!     seconds.checked_add(by).ok_or_else(|| {
//!         AltTimeError::math_error("shift", MathErrorKind::Overflow, "timestamp out of range")
//!     })
//! }
//!
//! assert!(shift(i64::MAX, 1).is_err());
//! ```

use thiserror::Error;

/// Classification of arithmetic errors.
///
/// Used with [`AltTimeError::MathError`] to distinguish between different
/// numerical failure modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathErrorKind {
    /// Result exceeds the representable range (too large).
    Overflow,
    /// Result below the representable range (too small).
    Underflow,
    /// Value outside the valid domain of the operation.
    OutOfRange,
}

/// Unified error type for calendar conversions.
#[derive(Error, Debug)]
pub enum AltTimeError {
    /// Input text could not be normalized into an instant.
    #[error("Parse error for '{input}': {message}")]
    ParseError { input: String, message: String },

    /// Calendar fields that do not name a real day.
    #[error("Invalid date {year}-{month:02}-{day:02}: {message}")]
    InvalidDate {
        year: i64,
        month: u32,
        day: u32,
        message: String,
    },

    /// Integer arithmetic failure.
    #[error("Math error in {operation} ({kind:?}): {message}")]
    MathError {
        operation: String,
        kind: MathErrorKind,
        message: String,
    },

    /// Internal consistency failure in an algorithm.
    #[error("Calculation error in {context}: {message}")]
    CalculationError { context: String, message: String },

    /// Settings could not be read or validated.
    ///
    /// This is the only recoverable variant: callers fall back to defaults.
    #[error("Config error ({source_name}): {message}")]
    ConfigError {
        source_name: String,
        message: String,
    },
}

/// Convenience alias for `Result<T, AltTimeError>`.
pub type AltTimeResult<T> = Result<T, AltTimeError>;

impl AltTimeError {
    /// Creates a [`ParseError`](Self::ParseError).
    pub fn parse_error(input: &str, reason: &str) -> Self {
        Self::ParseError {
            input: input.to_string(),
            message: reason.to_string(),
        }
    }

    /// Creates an [`InvalidDate`](Self::InvalidDate) error.
    pub fn invalid_date(year: i64, month: u32, day: u32, reason: &str) -> Self {
        Self::InvalidDate {
            year,
            month,
            day,
            message: reason.to_string(),
        }
    }

    /// Creates a [`MathError`](Self::MathError) with the given kind.
    pub fn math_error(operation: &str, kind: MathErrorKind, reason: &str) -> Self {
        Self::MathError {
            operation: operation.to_string(),
            kind,
            message: reason.to_string(),
        }
    }

    /// Creates a [`CalculationError`](Self::CalculationError).
    pub fn calculation_error(context: &str, reason: &str) -> Self {
        Self::CalculationError {
            context: context.to_string(),
            message: reason.to_string(),
        }
    }

    /// Creates a [`ConfigError`](Self::ConfigError) (the only recoverable variant).
    pub fn config_error(source_name: &str, reason: &str) -> Self {
        Self::ConfigError {
            source_name: source_name.to_string(),
            message: reason.to_string(),
        }
    }

    /// Returns `true` if falling back to defaults is a reasonable response.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::ConfigError { .. })
    }
}
