//! PostgreSQL adapters - Database implementations for the idea store ports.
//!
//! - `PostgresIdeaReader` - Idea queries against the `ideas` table
//! - `PostgresStoreStatus` - Connectivity report for `/test`

mod idea_reader;
mod pool;
mod store_status;

pub use idea_reader::PostgresIdeaReader;
pub use pool::{connect_lazy, run_migrations};
pub use store_status::PostgresStoreStatus;
