//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors raised when client input cannot be turned into domain values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Date must be YYYY-MM-DD, got '{value}'")]
    BadDateFormat { value: String },

    #[error("Invalid phase. Use: period, follicular, ovulation, luteal")]
    UnsupportedPhase { value: String },

    #[error("Cycle length must be a positive number of days, got {actual}")]
    NonPositiveCycleLength { actual: i64 },

    #[error("Cycle length of {actual} days is too large")]
    CycleLengthTooLarge { actual: i64 },

    #[error("Cycle length must be between {min} and {max} days, got {actual}")]
    CycleLengthOutOfRange { min: u32, max: u32, actual: u32 },

    #[error("Date arithmetic for '{field}' leaves the supported calendar range")]
    DateOutOfRange { field: String },
}

impl ValidationError {
    /// Creates a bad date format error for the offending input.
    pub fn bad_date_format(value: impl Into<String>) -> Self {
        ValidationError::BadDateFormat {
            value: value.into(),
        }
    }

    /// Creates an unsupported phase error for the offending input.
    pub fn unsupported_phase(value: impl Into<String>) -> Self {
        ValidationError::UnsupportedPhase {
            value: value.into(),
        }
    }

    pub fn date_out_of_range(field: impl Into<String>) -> Self {
        ValidationError::DateOutOfRange {
            field: field.into(),
        }
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::BadDateFormat { .. } => ErrorCode::BadDateFormat,
            ValidationError::UnsupportedPhase { .. } => ErrorCode::UnsupportedPhase,
            ValidationError::NonPositiveCycleLength { .. }
            | ValidationError::CycleLengthTooLarge { .. }
            | ValidationError::CycleLengthOutOfRange { .. } => ErrorCode::OutOfRange,
            ValidationError::DateOutOfRange { .. } => ErrorCode::OutOfRange,
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    BadDateFormat,
    UnsupportedPhase,
    OutOfRange,

    // Infrastructure errors
    DependencyUnavailable,
    DatabaseError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::BadDateFormat => "BAD_DATE_FORMAT",
            ErrorCode::UnsupportedPhase => "UNSUPPORTED_PHASE",
            ErrorCode::OutOfRange => "OUT_OF_RANGE",
            ErrorCode::DependencyUnavailable => "DEPENDENCY_UNAVAILABLE",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates an error for a collaborator that could not be reached.
    pub fn unavailable(dependency: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DependencyUnavailable, message).with_detail("dependency", dependency)
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}
