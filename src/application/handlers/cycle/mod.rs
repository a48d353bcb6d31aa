//! Cycle handlers.

mod calculate_cycle;

pub use calculate_cycle::{
    CalculateCycleHandler, CalculateCycleQuery, CalculateCycleResult, CycleLengthPolicy,
};
