//! In-memory idea store.
//!
//! Useful for:
//! - Development without a database
//! - Tests exercising both the available and the unavailable store
//!
//! When no database is configured the server uses [`InMemoryIdeaReader::unavailable`],
//! so every lookup falls through to the built-in fallback ideas.

use async_trait::async_trait;

use crate::domain::cycle::Phase;
use crate::domain::foundation::DomainError;
use crate::domain::guidance::Idea;
use crate::ports::{IdeaDocument, IdeaFilter, IdeaReader, StoreStatus, StoreStatusProbe};

/// In-memory implementation of the IdeaReader port.
#[derive(Debug, Clone, Default)]
pub struct InMemoryIdeaReader {
    documents: Vec<IdeaDocument>,
    available: bool,
}

impl InMemoryIdeaReader {
    /// Creates a store holding the given ideas.
    pub fn new(ideas: Vec<Idea>) -> Self {
        Self {
            documents: ideas.into_iter().map(IdeaDocument::from_idea).collect(),
            available: true,
        }
    }

    /// Creates a store with the standard seed ideas.
    pub fn seeded() -> Self {
        Self::new(seed_ideas())
    }

    /// Creates a store that fails every query.
    pub fn unavailable() -> Self {
        Self {
            documents: Vec::new(),
            available: false,
        }
    }
}

/// The ideas the database migration seeds.
pub fn seed_ideas() -> Vec<Idea> {
    vec![
        Idea::new(
            Phase::Period,
            "Comfort kit",
            "Heat pad, chocolate, tea, low-key movie night",
        )
        .with_tags(vec!["comfort".to_string(), "food".to_string()]),
        Idea::new(
            Phase::Period,
            "Take chores off her plate",
            "Run errands, cook, tidy up without being asked",
        )
        .with_tags(vec!["help".to_string()]),
        Idea::new(
            Phase::Follicular,
            "Plan a fun date",
            "She may feel more energetic—try a new activity together",
        )
        .with_tags(vec!["date".to_string()]),
        Idea::new(
            Phase::Ovulation,
            "Hype her up",
            "Compliments and quality time—she'll likely feel confident",
        )
        .with_tags(vec!["vibe".to_string()]),
        Idea::new(
            Phase::Luteal,
            "Gentle support",
            "Be patient, offer snacks, suggest cozy plans",
        )
        .with_tags(vec!["comfort".to_string()]),
    ]
}

#[async_trait]
impl IdeaReader for InMemoryIdeaReader {
    async fn find(&self, filter: &IdeaFilter, limit: u32) -> Result<Vec<IdeaDocument>, DomainError> {
        if !self.available {
            return Err(DomainError::unavailable(
                "memory",
                "No idea store is configured",
            ));
        }

        let matching = self.documents.iter().filter(|d| filter.matches(d)).cloned();
        Ok(match limit {
            0 => matching.collect(),
            n => matching.take(n as usize).collect(),
        })
    }
}

#[async_trait]
impl StoreStatusProbe for InMemoryIdeaReader {
    async fn check(&self) -> StoreStatus {
        if self.available {
            StoreStatus::connected(vec!["ideas".to_string()])
        } else {
            StoreStatus::not_configured()
        }
    }
}
