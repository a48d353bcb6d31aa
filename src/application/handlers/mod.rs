//! Application handlers.
//!
//! Query handlers that orchestrate domain operations over the ports.

pub mod cycle;
pub mod guidance;

pub use cycle::{CalculateCycleHandler, CalculateCycleQuery, CalculateCycleResult, CycleLengthPolicy};
pub use guidance::{IdeaLookup, ListIdeasHandler, ListIdeasQuery};
