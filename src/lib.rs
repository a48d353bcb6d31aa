//! Cycle Companion - partner support backend
//!
//! Turns a menstrual cycle start date and length into today's phase and the
//! next predicted period, and serves phase-matched support ideas from an
//! optional store with a built-in fallback.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
