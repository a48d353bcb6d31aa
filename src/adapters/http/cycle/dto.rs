//! HTTP DTOs for cycle endpoints.

use serde::{Deserialize, Serialize};

use crate::application::CalculateCycleResult;
use crate::domain::cycle::Phase;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to calculate today's cycle position.
#[derive(Debug, Clone, Deserialize)]
pub struct CalculateCycleRequest {
    /// Name of the person whose cycle is tracked.
    #[serde(default)]
    pub partner_name: Option<String>,
    /// Cycle start date in `YYYY-MM-DD`.
    pub cycle_start: String,
    /// Cycle length in days; the configured default applies when absent.
    #[serde(default)]
    pub cycle_length: Option<i64>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Response for a cycle calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateCycleResponse {
    /// Reference date (`YYYY-MM-DD`).
    pub today: String,
    pub day_in_cycle: u32,
    pub phase: Phase,
    /// Next predicted cycle start (`YYYY-MM-DD`).
    pub next_period_start: String,
    pub cycle_length: u32,
}

impl From<CalculateCycleResult> for CalculateCycleResponse {
    fn from(result: CalculateCycleResult) -> Self {
        Self {
            today: result.cycle.reference_date.to_string(),
            day_in_cycle: result.cycle.day_in_cycle,
            phase: result.cycle.phase,
            next_period_start: result.cycle.next_period_start.to_string(),
            cycle_length: result.cycle_length.days(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_defaults_optional_fields() {
        let request: CalculateCycleRequest =
            serde_json::from_str(r#"{"cycle_start": "2024-01-01"}"#).unwrap();
        assert_eq!(request.cycle_start, "2024-01-01");
        assert!(request.partner_name.is_none());
        assert!(request.cycle_length.is_none());
    }

    #[test]
    fn request_accepts_all_fields() {
        let request: CalculateCycleRequest = serde_json::from_str(
            r#"{"partner_name": "Alex", "cycle_start": "2024-01-01", "cycle_length": 30}"#,
        )
        .unwrap();
        assert_eq!(request.partner_name.as_deref(), Some("Alex"));
        assert_eq!(request.cycle_length, Some(30));
    }
}
