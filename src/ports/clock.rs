//! Clock port - source of "today" for cycle calculations.

use crate::domain::foundation::CalendarDate;

/// Supplies the current UTC calendar date.
pub trait Clock: Send + Sync {
    fn today(&self) -> CalendarDate;
}
