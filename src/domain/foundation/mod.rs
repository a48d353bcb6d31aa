//! Foundation module - Shared domain primitives.
//!
//! Contains the calendar value object and the error vocabulary shared by
//! the cycle and guidance modules.

mod calendar_date;
mod errors;

pub use calendar_date::{CalendarDate, DATE_FORMAT};
pub use errors::{DomainError, ErrorCode, ValidationError};
