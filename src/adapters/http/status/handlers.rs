//! HTTP handlers for liveness and store status.

use std::sync::Arc;

use axum::extract::{Json, State};
use serde::{Deserialize, Serialize};

use crate::ports::{StoreStatus, StoreStatusProbe};

/// Shared state for status endpoints.
#[derive(Clone)]
pub struct StatusAppState {
    pub probe: Arc<dyn StoreStatusProbe>,
}

impl StatusAppState {
    pub fn new(probe: Arc<dyn StoreStatusProbe>) -> Self {
        Self { probe }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Store status report for `GET /test`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub backend: String,
    /// One of `connected`, `unavailable` or `not_configured`.
    pub database: String,
    pub collections: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<StoreStatus> for StatusResponse {
    fn from(status: StoreStatus) -> Self {
        let database = match (status.configured, status.connected) {
            (false, _) => "not_configured",
            (true, true) => "connected",
            (true, false) => "unavailable",
        };
        Self {
            backend: "running".to_string(),
            database: database.to_string(),
            collections: status.collections,
            error: status.error,
        }
    }
}

/// GET / - Liveness message
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Cycle companion backend is running".to_string(),
    })
}

/// GET /test - Report idea store connectivity
pub async fn store_status(State(state): State<StatusAppState>) -> Json<StatusResponse> {
    let status = state.probe.check().await;
    Json(StatusResponse::from(status))
}
