//! HTTP adapter for phase guidance.
//!
//! # Endpoints
//!
//! - `GET /api/ideas` - Phase-tagged ideas with built-in fallback
//! - `GET /api/explain` - Fixed summary and tips for a phase

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::GuidanceAppState;
pub use routes::guidance_router;
