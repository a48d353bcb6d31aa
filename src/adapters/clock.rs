//! Clock adapters.

use chrono::Utc;

use crate::domain::foundation::CalendarDate;
use crate::ports::Clock;

/// Wall clock in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> CalendarDate {
        CalendarDate::from_naive(Utc::now().date_naive())
    }
}

/// Clock pinned to one date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub CalendarDate);

impl Clock for FixedClock {
    fn today(&self) -> CalendarDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_matches_utc_date() {
        let before = Utc::now().date_naive();
        let today = SystemClock.today();
        let after = Utc::now().date_naive();
        assert!(*today.as_naive() >= before && *today.as_naive() <= after);
    }

    #[test]
    fn fixed_clock_returns_its_date() {
        let date = CalendarDate::parse("2024-01-01").unwrap();
        assert_eq!(FixedClock(date).today(), date);
    }
}
