//! Guidance module - static advice keyed by phase.
//!
//! - `explain` - Fixed summary and tips per phase
//! - `idea` - Phase-tagged idea records and the built-in fallback list

mod explain;
mod idea;

pub use explain::{explain, PhaseGuidance};
pub use idea::{fallback_ideas, Idea};
