//! Cycle phases and the fixed phase table.
//!
//! The table describes a normalized 28-day cycle. Days past the end of the
//! table (cycles longer than 28 days) resolve to [`Phase::Luteal`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// One of the four named segments of a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Period,
    Follicular,
    Ovulation,
    Luteal,
}

impl Phase {
    /// All phases in cycle order.
    pub const ALL: [Phase; 4] = [
        Phase::Period,
        Phase::Follicular,
        Phase::Ovulation,
        Phase::Luteal,
    ];

    /// Lowercase wire key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Period => "period",
            Phase::Follicular => "follicular",
            Phase::Ovulation => "ovulation",
            Phase::Luteal => "luteal",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Phase {
    type Err = ValidationError;

    /// Parses a phase key, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "period" => Ok(Phase::Period),
            "follicular" => Ok(Phase::Follicular),
            "ovulation" => Ok(Phase::Ovulation),
            "luteal" => Ok(Phase::Luteal),
            _ => Err(ValidationError::unsupported_phase(s)),
        }
    }
}

/// Inclusive day range owned by a phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseRange {
    pub start_day: u32,
    pub end_day: u32,
    pub phase: Phase,
}

impl PhaseRange {
    const fn new(start_day: u32, end_day: u32, phase: Phase) -> Self {
        Self {
            start_day,
            end_day,
            phase,
        }
    }

    pub fn contains(&self, day_index: u32) -> bool {
        self.start_day <= day_index && day_index <= self.end_day
    }
}

/// Ordered, non-overlapping ranges covering days 0 through 27.
pub static PHASE_TABLE: [PhaseRange; 4] = [
    PhaseRange::new(0, 5, Phase::Period),
    PhaseRange::new(6, 13, Phase::Follicular),
    PhaseRange::new(14, 15, Phase::Ovulation),
    PhaseRange::new(16, 27, Phase::Luteal),
];

/// Phase for a zero-based day index, scanning the table in order.
///
/// Indices beyond the table fall back to luteal.
pub fn phase_for_day(day_index: u32) -> Phase {
    PHASE_TABLE
        .iter()
        .find(|range| range.contains(day_index))
        .map(|range| range.phase)
        .unwrap_or(Phase::Luteal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_six_days_are_period() {
        for day in 0..=5 {
            assert_eq!(phase_for_day(day), Phase::Period, "day {}", day);
        }
    }

    #[test]
    fn days_six_to_thirteen_are_follicular() {
        for day in 6..=13 {
            assert_eq!(phase_for_day(day), Phase::Follicular, "day {}", day);
        }
    }

    #[test]
    fn days_fourteen_and_fifteen_are_ovulation() {
        assert_eq!(phase_for_day(14), Phase::Ovulation);
        assert_eq!(phase_for_day(15), Phase::Ovulation);
    }

    #[test]
    fn days_sixteen_to_twenty_seven_are_luteal() {
        for day in 16..=27 {
            assert_eq!(phase_for_day(day), Phase::Luteal, "day {}", day);
        }
    }

    #[test]
    fn days_past_table_default_to_luteal() {
        for day in [28, 29, 34, 100] {
            assert_eq!(phase_for_day(day), Phase::Luteal, "day {}", day);
        }
    }

    #[test]
    fn table_covers_each_day_exactly_once() {
        for day in 0..28 {
            let matches = PHASE_TABLE.iter().filter(|r| r.contains(day)).count();
            assert_eq!(matches, 1, "day {}", day);
        }
    }

    #[test]
    fn parses_keys_ignoring_case() {
        assert_eq!("period".parse::<Phase>().unwrap(), Phase::Period);
        assert_eq!("LUTEAL".parse::<Phase>().unwrap(), Phase::Luteal);
        assert_eq!("Ovulation".parse::<Phase>().unwrap(), Phase::Ovulation);
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = "invalid".parse::<Phase>().unwrap_err();
        assert!(matches!(err, ValidationError::UnsupportedPhase { .. }));
    }

    #[test]
    fn serializes_as_lowercase_key() {
        let json = serde_json::to_string(&Phase::Follicular).unwrap();
        assert_eq!(json, "\"follicular\"");
    }
}
