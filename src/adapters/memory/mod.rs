//! In-memory adapters for development and tests.

mod idea_reader;

pub use idea_reader::{seed_ideas, InMemoryIdeaReader};
