//! Application layer - Queries and Handlers.
//!
//! This layer validates input and coordinates the domain with its ports.

pub mod handlers;

pub use handlers::{
    CalculateCycleHandler, CalculateCycleQuery, CalculateCycleResult, CycleLengthPolicy,
    IdeaLookup, ListIdeasHandler, ListIdeasQuery,
};
