//! HTTP handlers for cycle endpoints.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::response::IntoResponse;

use crate::application::{CalculateCycleHandler, CalculateCycleQuery, CycleLengthPolicy};
use crate::domain::cycle::CycleLength;
use crate::ports::Clock;

use super::dto::{CalculateCycleRequest, CalculateCycleResponse};
use crate::adapters::http::error::ApiError;

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for cycle endpoints.
#[derive(Clone)]
pub struct CycleAppState {
    pub clock: Arc<dyn Clock>,
    pub policy: CycleLengthPolicy,
    pub default_length: CycleLength,
}

impl CycleAppState {
    pub fn new(clock: Arc<dyn Clock>, policy: CycleLengthPolicy, default_length: CycleLength) -> Self {
        Self {
            clock,
            policy,
            default_length,
        }
    }

    pub fn calculate_cycle_handler(&self) -> CalculateCycleHandler {
        CalculateCycleHandler::new(self.clock.clone(), self.policy)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/cycle/calculate - Today's day-in-cycle, phase and next start
pub async fn calculate_cycle(
    State(state): State<CycleAppState>,
    payload: Result<Json<CalculateCycleRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload?;
    let handler = state.calculate_cycle_handler();
    let query = CalculateCycleQuery {
        partner_name: request.partner_name,
        cycle_start: request.cycle_start,
        cycle_length: request
            .cycle_length
            .unwrap_or_else(|| i64::from(state.default_length.days())),
    };

    let result = handler.handle(query)?;

    Ok(Json(CalculateCycleResponse::from(result)))
}
