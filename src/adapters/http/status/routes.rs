//! Route configuration for status endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{root, store_status, StatusAppState};

/// Creates the status router.
///
/// Routes:
/// - `GET /` - Liveness message
/// - `GET /test` - Store status report
pub fn status_router() -> Router<StatusAppState> {
    Router::new()
        .route("/", get(root))
        .route("/test", get(store_status))
}
