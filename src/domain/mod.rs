//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (calendar date, errors)
//! - `cycle` - Phase table and pure cycle arithmetic
//! - `guidance` - Phase explanations and idea records

pub mod cycle;
pub mod foundation;
pub mod guidance;
