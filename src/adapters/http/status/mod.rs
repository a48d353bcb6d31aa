//! HTTP adapter for liveness and store diagnostics.

pub mod handlers;
pub mod routes;

pub use handlers::StatusAppState;
pub use routes::status_router;
