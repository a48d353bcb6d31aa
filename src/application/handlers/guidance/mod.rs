//! Guidance handlers.

mod list_ideas;

pub use list_ideas::{IdeaLookup, ListIdeasHandler, ListIdeasQuery};
