//! HTTP handlers for guidance endpoints.

use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Json, Query, State};
use axum::response::IntoResponse;

use crate::adapters::http::error::ApiError;
use crate::application::{ListIdeasHandler, ListIdeasQuery};
use crate::domain::cycle::Phase;
use crate::domain::guidance::explain;
use crate::ports::IdeaReader;

use super::dto::{ExplainParams, ExplainResponse, IdeasResponse, ListIdeasParams};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for guidance endpoints.
#[derive(Clone)]
pub struct GuidanceAppState {
    pub idea_reader: Arc<dyn IdeaReader>,
    pub default_limit: u32,
}

impl GuidanceAppState {
    pub fn new(idea_reader: Arc<dyn IdeaReader>, default_limit: u32) -> Self {
        Self {
            idea_reader,
            default_limit,
        }
    }

    pub fn list_ideas_handler(&self) -> ListIdeasHandler {
        ListIdeasHandler::new(self.idea_reader.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/ideas - Phase-tagged ideas, falling back to built-ins when the store is down
pub async fn list_ideas(
    State(state): State<GuidanceAppState>,
    params: Result<Query<ListIdeasParams>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(params) = params?;
    let phase = match params.phase.as_deref() {
        None | Some("") => None,
        Some(name) => Some(name.parse::<Phase>()?),
    };
    let query = ListIdeasQuery {
        phase,
        limit: params.limit.unwrap_or(state.default_limit),
    };

    let items = state.list_ideas_handler().handle(query).await;

    Ok(Json(IdeasResponse { items }))
}

/// GET /api/explain - Summary and tips for one phase
pub async fn explain_phase(
    params: Result<Query<ExplainParams>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(params) = params?;
    let guidance = explain(&params.phase)?;
    Ok(Json(ExplainResponse::from(guidance)))
}
