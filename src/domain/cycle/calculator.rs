//! Cycle arithmetic: day-in-cycle, phase lookup and next-start prediction.
//!
//! All functions here are pure. Dates are compared at day granularity.

use serde::Serialize;

use super::phase::{phase_for_day, Phase};
use crate::domain::foundation::{CalendarDate, ValidationError};

/// Length of one cycle in days. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct CycleLength(u32);

impl CycleLength {
    /// Length assumed when the caller does not supply one.
    pub const DEFAULT: CycleLength = CycleLength(28);

    /// Creates a cycle length from raw client input.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::NonPositiveCycleLength` for zero or negative
    /// values and `ValidationError::CycleLengthTooLarge` above `u32::MAX`.
    pub fn new(days: i64) -> Result<Self, ValidationError> {
        if days <= 0 {
            return Err(ValidationError::NonPositiveCycleLength { actual: days });
        }
        u32::try_from(days)
            .map(Self)
            .map_err(|_| ValidationError::CycleLengthTooLarge { actual: days })
    }

    pub fn days(&self) -> u32 {
        self.0
    }

    /// Checks the length against an inclusive plausible range.
    pub fn ensure_within(&self, min: u32, max: u32) -> Result<(), ValidationError> {
        if self.0 < min || self.0 > max {
            return Err(ValidationError::CycleLengthOutOfRange {
                min,
                max,
                actual: self.0,
            });
        }
        Ok(())
    }
}

impl Default for CycleLength {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Immutable input to every calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleConfig {
    pub cycle_start: CalendarDate,
    pub cycle_length: CycleLength,
}

impl CycleConfig {
    pub fn new(cycle_start: CalendarDate, cycle_length: CycleLength) -> Self {
        Self {
            cycle_start,
            cycle_length,
        }
    }
}

/// Derived result for one reference date. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleResult {
    pub reference_date: CalendarDate,
    pub day_in_cycle: u32,
    pub phase: Phase,
    pub next_period_start: CalendarDate,
}

/// Zero-based offset of `reference_date` within its cycle repetition.
///
/// Uses a floor modulus, so dates before `cycle_start` still land in
/// `[0, cycle_length)`.
pub fn day_in_cycle(
    cycle_start: CalendarDate,
    cycle_length: CycleLength,
    reference_date: CalendarDate,
) -> u32 {
    let delta = reference_date.days_since(&cycle_start);
    // rem_euclid with a positive divisor is in [0, cycle_length)
    delta.rem_euclid(i64::from(cycle_length.days())) as u32
}

/// Next predicted cycle start as seen from `reference_date`.
///
/// Equivalent to stepping `next = cycle_start` forward by whole cycles while
/// `next + cycle_length <= reference_date`, then returning `next` if it is
/// on or after the reference date and `next + cycle_length` otherwise. A
/// reference date that falls exactly on a cycle start reports that day.
///
/// # Errors
///
/// Returns `ValidationError::DateOutOfRange` if the prediction falls outside
/// the supported calendar.
pub fn predict_next_period_start(
    cycle_start: CalendarDate,
    cycle_length: CycleLength,
    reference_date: CalendarDate,
) -> Result<CalendarDate, ValidationError> {
    let length = i64::from(cycle_length.days());
    let delta = reference_date.days_since(&cycle_start);

    // Number of whole steps the forward walk takes before stopping.
    let steps = delta.max(0) / length;
    let latest_start = cycle_start
        .checked_add_days(steps * length)
        .ok_or_else(|| ValidationError::date_out_of_range("next_period_start"))?;

    if latest_start >= reference_date {
        return Ok(latest_start);
    }
    latest_start
        .checked_add_days(length)
        .ok_or_else(|| ValidationError::date_out_of_range("next_period_start"))
}

/// Runs the full calculation for one reference date.
pub fn calculate(
    config: &CycleConfig,
    reference_date: CalendarDate,
) -> Result<CycleResult, ValidationError> {
    let day = day_in_cycle(config.cycle_start, config.cycle_length, reference_date);
    let next_period_start =
        predict_next_period_start(config.cycle_start, config.cycle_length, reference_date)?;

    Ok(CycleResult {
        reference_date,
        day_in_cycle: day,
        phase: phase_for_day(day),
        next_period_start,
    })
}
