//! Idea reader port (read side of the idea store).
//!
//! Defines the contract for querying seeded idea records. Implementations
//! return the stored form, including storage identity and timestamps; the
//! application layer strips those before anything reaches a caller.
//!
//! # Example
//!
//! ```ignore
//! async fn luteal_ideas(reader: &dyn IdeaReader) -> Result<Vec<IdeaDocument>, DomainError> {
//!     reader.find(&IdeaFilter::for_phase(Phase::Luteal), 10).await
//! }
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::cycle::Phase;
use crate::domain::foundation::DomainError;
use crate::domain::guidance::Idea;

/// Reader port for idea queries.
#[async_trait]
pub trait IdeaReader: Send + Sync {
    /// Find ideas matching the filter.
    ///
    /// A `limit` of zero means no limit.
    async fn find(&self, filter: &IdeaFilter, limit: u32) -> Result<Vec<IdeaDocument>, DomainError>;
}

/// Query filter for ideas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdeaFilter {
    pub phase: Option<Phase>,
}

impl IdeaFilter {
    /// Filter that matches every idea.
    pub fn any() -> Self {
        Self::default()
    }

    pub fn for_phase(phase: Phase) -> Self {
        Self { phase: Some(phase) }
    }

    pub fn matches(&self, document: &IdeaDocument) -> bool {
        self.phase.map_or(true, |phase| document.phase == phase)
    }
}

/// Stored form of an idea.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdeaDocument {
    /// Storage identity.
    pub id: Uuid,
    pub phase: Phase,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl IdeaDocument {
    /// Wraps a public idea in a fresh storage record.
    pub fn from_idea(idea: Idea) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            phase: idea.phase,
            title: idea.title,
            description: idea.description,
            tags: idea.tags,
            created_at: Some(now),
            updated_at: Some(now),
        }
    }
}

impl From<IdeaDocument> for Idea {
    fn from(document: IdeaDocument) -> Self {
        Idea {
            phase: document.phase,
            title: document.title,
            description: document.description,
            tags: document.tags,
        }
    }
}
