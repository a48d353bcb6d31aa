//! CalculateCycleHandler - Query handler for the current cycle position.

use std::sync::Arc;

use crate::domain::cycle::{calculate, CycleConfig, CycleLength, CycleResult};
use crate::domain::foundation::{CalendarDate, ValidationError};
use crate::ports::Clock;

/// Query to compute today's position in a cycle.
#[derive(Debug, Clone)]
pub struct CalculateCycleQuery {
    pub partner_name: Option<String>,
    /// Raw `YYYY-MM-DD` start date.
    pub cycle_start: String,
    pub cycle_length: i64,
}

/// Result of a successful calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculateCycleResult {
    pub cycle: CycleResult,
    pub cycle_length: CycleLength,
}

/// Plausible-range policy applied to incoming cycle lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleLengthPolicy {
    pub enforce: bool,
    pub min_days: u32,
    pub max_days: u32,
}

impl Default for CycleLengthPolicy {
    fn default() -> Self {
        Self {
            enforce: false,
            min_days: 21,
            max_days: 35,
        }
    }
}

/// Handler that validates input and runs the cycle calculator against today.
pub struct CalculateCycleHandler {
    clock: Arc<dyn Clock>,
    policy: CycleLengthPolicy,
}

impl CalculateCycleHandler {
    pub fn new(clock: Arc<dyn Clock>, policy: CycleLengthPolicy) -> Self {
        Self { clock, policy }
    }

    pub fn handle(&self, query: CalculateCycleQuery) -> Result<CalculateCycleResult, ValidationError> {
        let cycle_start = CalendarDate::parse(&query.cycle_start)?;
        let cycle_length = CycleLength::new(query.cycle_length)?;

        if let Err(err) = cycle_length.ensure_within(self.policy.min_days, self.policy.max_days) {
            if self.policy.enforce {
                return Err(err);
            }
            tracing::warn!(
                cycle_length = cycle_length.days(),
                "Cycle length outside plausible range, calculating anyway"
            );
        }

        let today = self.clock.today();
        let cycle = calculate(&CycleConfig::new(cycle_start, cycle_length), today)?;

        tracing::debug!(
            partner = query.partner_name.as_deref().unwrap_or("-"),
            day_in_cycle = cycle.day_in_cycle,
            phase = %cycle.phase,
            "Calculated cycle position"
        );

        Ok(CalculateCycleResult {
            cycle,
            cycle_length,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::clock::FixedClock;
    use crate::domain::cycle::Phase;

    // ════════════════════════════════════════════════════════════════════════════
    // Test Helpers
    // ════════════════════════════════════════════════════════════════════════════

    fn handler_on(today: &str, policy: CycleLengthPolicy) -> CalculateCycleHandler {
        let clock = Arc::new(FixedClock(CalendarDate::parse(today).unwrap()));
        CalculateCycleHandler::new(clock, policy)
    }

    fn query(cycle_start: &str, cycle_length: i64) -> CalculateCycleQuery {
        CalculateCycleQuery {
            partner_name: Some("Sam".to_string()),
            cycle_start: cycle_start.to_string(),
            cycle_length,
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Success Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn computes_position_for_today() {
        let handler = handler_on("2024-01-15", CycleLengthPolicy::default());
        let result = handler.handle(query("2024-01-01", 28)).unwrap();

        assert_eq!(result.cycle.reference_date.to_string(), "2024-01-15");
        assert_eq!(result.cycle.day_in_cycle, 14);
        assert_eq!(result.cycle.phase, Phase::Ovulation);
        assert_eq!(result.cycle.next_period_start.to_string(), "2024-01-29");
        assert_eq!(result.cycle_length.days(), 28);
    }

    #[test]
    fn start_today_is_next_period_start() {
        let handler = handler_on("2024-01-01", CycleLengthPolicy::default());
        let result = handler.handle(query("2024-01-01", 28)).unwrap();

        assert_eq!(result.cycle.day_in_cycle, 0);
        assert_eq!(result.cycle.next_period_start.to_string(), "2024-01-01");
    }

    #[test]
    fn long_cycle_past_table_is_luteal() {
        let handler = handler_on("2024-01-29", CycleLengthPolicy::default());
        let result = handler.handle(query("2024-01-01", 30)).unwrap();

        assert_eq!(result.cycle.day_in_cycle, 28);
        assert_eq!(result.cycle.phase, Phase::Luteal);
    }

    #[test]
    fn implausible_length_is_allowed_when_not_enforced() {
        let handler = handler_on("2024-01-15", CycleLengthPolicy::default());
        assert!(handler.handle(query("2024-01-01", 60)).is_ok());
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Validation Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn rejects_malformed_start_date() {
        let handler = handler_on("2024-01-15", CycleLengthPolicy::default());
        let err = handler.handle(query("01-01-2024", 28)).unwrap_err();
        assert!(matches!(err, ValidationError::BadDateFormat { .. }));
    }

    #[test]
    fn rejects_zero_length() {
        let handler = handler_on("2024-01-15", CycleLengthPolicy::default());
        let err = handler.handle(query("2024-01-01", 0)).unwrap_err();
        assert!(matches!(err, ValidationError::NonPositiveCycleLength { .. }));
    }

    #[test]
    fn rejects_implausible_length_when_enforced() {
        let policy = CycleLengthPolicy {
            enforce: true,
            ..Default::default()
        };
        let handler = handler_on("2024-01-15", policy);
        let err = handler.handle(query("2024-01-01", 40)).unwrap_err();
        assert!(matches!(err, ValidationError::CycleLengthOutOfRange { actual: 40, .. }));
    }
}
