//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `IdeaReader` - Query seeded idea records
//! - `StoreStatusProbe` - Diagnostic connectivity report for the idea store
//! - `Clock` - Current calendar date

mod clock;
mod idea_reader;
mod store_status;

pub use clock::Clock;
pub use idea_reader::{IdeaDocument, IdeaFilter, IdeaReader};
pub use store_status::{StoreStatus, StoreStatusProbe, STATUS_ERROR_MAX_CHARS};
