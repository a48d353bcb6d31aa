//! HTTP adapters - REST API implementations.
//!
//! Each module has its own state, DTOs and router; [`app_router`] merges
//! them and applies the cross-cutting layers.

pub mod cycle;
pub mod error;
pub mod guidance;
pub mod status;

use axum::http::HeaderValue;
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

pub use cycle::{cycle_router, CycleAppState};
pub use error::{ApiError, ErrorResponse};
pub use guidance::{guidance_router, GuidanceAppState};
pub use status::{status_router, StatusAppState};

/// States for every HTTP module.
#[derive(Clone)]
pub struct AppStates {
    pub cycle: CycleAppState,
    pub guidance: GuidanceAppState,
    pub status: StatusAppState,
}

/// Builds the complete application router with tracing, timeout and CORS layers.
pub fn app_router(states: AppStates, server: &ServerConfig) -> Router {
    Router::new()
        .merge(cycle_router().with_state(states.cycle))
        .merge(guidance_router().with_state(states.guidance))
        .merge(status_router().with_state(states.status))
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(&server.cors_origins_list()))
        .layer(TraceLayer::new_for_http())
}

/// Any origin when none are configured, otherwise exactly the configured list.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(allowed))
}
