//! Adapters - Implementations of port interfaces.
//!
//! - `http` - axum routers and DTOs
//! - `postgres` - PostgreSQL idea store
//! - `memory` - In-memory idea store for development and tests
//! - `clock` - System and fixed clocks

pub mod clock;
pub mod http;
pub mod memory;
pub mod postgres;

pub use clock::{FixedClock, SystemClock};
pub use memory::InMemoryIdeaReader;
pub use postgres::{PostgresIdeaReader, PostgresStoreStatus};
