//! Route configuration for guidance endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{explain_phase, list_ideas, GuidanceAppState};

/// Creates the guidance router.
///
/// Routes:
/// - `GET /api/ideas?phase=&limit=` - List ideas
/// - `GET /api/explain?phase=` - Explain a phase
pub fn guidance_router() -> Router<GuidanceAppState> {
    Router::new()
        .route("/api/ideas", get(list_ideas))
        .route("/api/explain", get(explain_phase))
}
