//! Cycle module - phase table and cycle arithmetic.
//!
//! # Module Organization
//!
//! - `phase` - The four phases and the fixed 28-day phase table
//! - `calculator` - Day-in-cycle, phase lookup and next-start prediction

mod calculator;
mod phase;

pub use calculator::{
    calculate, day_in_cycle, predict_next_period_start, CycleConfig, CycleLength, CycleResult,
};
pub use phase::{phase_for_day, Phase, PhaseRange, PHASE_TABLE};
