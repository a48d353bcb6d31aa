//! HTTP adapter for the cycle module.
//!
//! # Endpoints
//!
//! - `POST /api/cycle/calculate` - Day-in-cycle, phase and next predicted start

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::CycleAppState;
pub use routes::cycle_router;
