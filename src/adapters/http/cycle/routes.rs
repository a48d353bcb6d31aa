//! Route configuration for cycle endpoints.

use axum::routing::post;
use axum::Router;

use super::handlers::{calculate_cycle, CycleAppState};

/// Creates the cycle router.
///
/// Routes:
/// - `POST /api/cycle/calculate` - Calculate today's cycle position
pub fn cycle_router() -> Router<CycleAppState> {
    Router::new().route("/api/cycle/calculate", post(calculate_cycle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::clock::FixedClock;
    use crate::adapters::http::cycle::dto::CalculateCycleResponse;
    use crate::adapters::http::error::ErrorResponse;
    use crate::application::CycleLengthPolicy;
    use crate::domain::cycle::{CycleLength, Phase};
    use crate::domain::foundation::CalendarDate;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app(today: &str) -> Router {
        let clock = Arc::new(FixedClock(CalendarDate::parse(today).unwrap()));
        let state = CycleAppState::new(clock, CycleLengthPolicy::default(), CycleLength::DEFAULT);
        cycle_router().with_state(state)
    }

    fn post_json(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/cycle/calculate")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn calculates_with_default_length() {
        let response = app("2024-01-15")
            .oneshot(post_json(r#"{"cycle_start": "2024-01-01"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: CalculateCycleResponse = body_json(response).await;
        assert_eq!(body.today, "2024-01-15");
        assert_eq!(body.day_in_cycle, 14);
        assert_eq!(body.phase, Phase::Ovulation);
        assert_eq!(body.next_period_start, "2024-01-29");
        assert_eq!(body.cycle_length, 28);
    }

    #[tokio::test]
    async fn honours_explicit_length() {
        let response = app("2024-01-31")
            .oneshot(post_json(
                r#"{"partner_name": "Alex", "cycle_start": "2024-01-01", "cycle_length": 32}"#,
            ))
            .await
            .unwrap();

        let body: CalculateCycleResponse = body_json(response).await;
        assert_eq!(body.day_in_cycle, 30);
        assert_eq!(body.phase, Phase::Luteal);
        assert_eq!(body.next_period_start, "2024-02-02");
        assert_eq!(body.cycle_length, 32);
    }

    #[tokio::test]
    async fn malformed_date_is_bad_request() {
        let response = app("2024-01-15")
            .oneshot(post_json(r#"{"cycle_start": "Jan 1 2024"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: ErrorResponse = body_json(response).await;
        assert_eq!(body.error_code, "BAD_DATE_FORMAT");
    }

    #[tokio::test]
    async fn non_positive_length_is_bad_request() {
        let response = app("2024-01-15")
            .oneshot(post_json(r#"{"cycle_start": "2024-01-01", "cycle_length": 0}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn non_integer_length_is_json_bad_request() {
        let response = app("2024-01-15")
            .oneshot(post_json(r#"{"cycle_start": "2024-01-01", "cycle_length": "abc"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: ErrorResponse = body_json(response).await;
        assert_eq!(body.error_code, "VALIDATION_FAILED");
        assert!(body.message.contains("cycle_length"));
    }

    #[tokio::test]
    async fn missing_start_is_json_bad_request() {
        let response = app("2024-01-15")
            .oneshot(post_json(r#"{"cycle_length": 28}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: ErrorResponse = body_json(response).await;
        assert_eq!(body.error_code, "VALIDATION_FAILED");
        assert!(body.message.contains("cycle_start"));
    }

    #[tokio::test]
    async fn oversized_length_is_out_of_range() {
        let response = app("2024-01-15")
            .oneshot(post_json(r#"{"cycle_start": "2024-01-01", "cycle_length": 5000000000}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: ErrorResponse = body_json(response).await;
        assert_eq!(body.error_code, "OUT_OF_RANGE");
        assert!(body.message.contains("too large"));
    }
}
