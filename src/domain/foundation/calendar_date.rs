//! Calendar date value object with day granularity.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::ValidationError;

/// Wire format for every date the API accepts or returns.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A naive UTC calendar date. Time of day never participates in comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Parses a `YYYY-MM-DD` string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::BadDateFormat` for anything that is not a
    /// real calendar date in that format.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::bad_date_format(value))
    }

    /// Creates a date from year, month and day, returning `None` for impossible dates.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Returns the inner NaiveDate.
    pub fn as_naive(&self) -> &NaiveDate {
        &self.0
    }

    /// Whole days from `earlier` to `self`; negative when `earlier` is later.
    pub fn days_since(&self, earlier: &CalendarDate) -> i64 {
        self.0.signed_duration_since(earlier.0).num_days()
    }

    /// Adds a (possibly negative) number of days, or `None` past the calendar's range.
    pub fn checked_add_days(&self, days: i64) -> Option<Self> {
        Duration::try_days(days)
            .and_then(|delta| self.0.checked_add_signed(delta))
            .map(Self)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
