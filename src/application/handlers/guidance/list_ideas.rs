//! ListIdeasHandler - Query handler for phase-tagged ideas.
//!
//! The idea store is optional. Any failure to query it is recovered here by
//! serving the built-in fallback list, so callers always receive ideas.

use std::sync::Arc;

use crate::domain::cycle::Phase;
use crate::domain::guidance::{fallback_ideas, Idea};
use crate::ports::{IdeaFilter, IdeaReader};

/// Query to list ideas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListIdeasQuery {
    pub phase: Option<Phase>,
    /// Zero means no limit.
    pub limit: u32,
}

/// Outcome of asking the store, before fallback is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdeaLookup {
    Found(Vec<Idea>),
    Unavailable { reason: String },
}

impl IdeaLookup {
    /// Resolves to the found ideas, or the fallback list when the store is unavailable.
    pub fn into_ideas(self) -> Vec<Idea> {
        match self {
            IdeaLookup::Found(ideas) => ideas,
            IdeaLookup::Unavailable { .. } => fallback_ideas(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, IdeaLookup::Unavailable { .. })
    }
}

/// Handler for listing ideas with total fallback.
pub struct ListIdeasHandler {
    reader: Arc<dyn IdeaReader>,
}

impl ListIdeasHandler {
    pub fn new(reader: Arc<dyn IdeaReader>) -> Self {
        Self { reader }
    }

    /// Asks the store once, without retry.
    pub async fn lookup(&self, query: ListIdeasQuery) -> IdeaLookup {
        let filter = IdeaFilter { phase: query.phase };
        match self.reader.find(&filter, query.limit).await {
            Ok(documents) => IdeaLookup::Found(documents.into_iter().map(Idea::from).collect()),
            Err(err) => {
                tracing::warn!(error = %err, "Idea store unavailable, serving fallback ideas");
                IdeaLookup::Unavailable {
                    reason: err.to_string(),
                }
            }
        }
    }

    pub async fn handle(&self, query: ListIdeasQuery) -> Vec<Idea> {
        self.lookup(query).await.into_ideas()
    }
}
