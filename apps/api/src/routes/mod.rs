pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::extraction::handlers::handle_extract;
use crate::matching::handlers::handle_rank;
use crate::screening::handlers::handle_screen;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_body_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/rankings", post(handle_rank))
        .route("/api/v1/screenings", post(handle_screen))
        .route("/api/v1/extract", post(handle_extract))
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;

    fn app() -> Router {
        build_router(AppState::new(Config::default()))
    }

    fn app_with(config: Config) -> Router {
        build_router(AppState::new(config))
    }

    async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let response = app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_rankings_orders_candidates() {
        let (status, body) = post_json(
            app(),
            "/api/v1/rankings",
            json!({
                "query": "Senior Frontend Developer React TypeScript Redux",
                "candidates": [
                    {"id": "B", "text": "Python Developer Django Flask PostgreSQL"},
                    {"id": "A", "text": "Senior Software Engineer React TypeScript Redux six years"},
                    {"id": "C", "text": "Accountant with payroll and bookkeeping background"},
                    {"id": "D", "text": "Warehouse forklift operator night shift"}
                ]
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let results = body["results"].as_array().unwrap();
        assert_eq!(results.len(), 4);
        assert_eq!(results[0]["candidate_id"], "A");
        assert_eq!(results[0]["rank"], 1);
        assert_eq!(results[1]["candidate_id"], "B");
        assert_eq!(body["candidate_count"], 4);
    }

    #[tokio::test]
    async fn test_rankings_empty_candidates_is_invalid_input() {
        let (status, body) = post_json(
            app(),
            "/api/v1/rankings",
            json!({"query": "rust engineer", "candidates": []}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "INVALID_INPUT");
    }

    #[tokio::test]
    async fn test_rankings_over_candidate_limit_is_rejected() {
        let config = Config {
            max_candidates: 1,
            ..Config::default()
        };
        let (status, body) = post_json(
            app_with(config),
            "/api/v1/rankings",
            json!({
                "query": "rust engineer",
                "candidates": [
                    {"id": "a", "text": "rust"},
                    {"id": "b", "text": "python"}
                ]
            }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_rankings_zero_term_limit_is_rejected() {
        let (status, body) = post_json(
            app(),
            "/api/v1/rankings",
            json!({
                "query": "rust engineer",
                "candidates": [{"id": "a", "text": "rust"}],
                "matched_terms_limit": 0
            }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_rankings_body_over_limit_is_rejected() {
        let config = Config {
            max_body_bytes: 64,
            ..Config::default()
        };
        let body = json!({
            "query": "Senior Frontend Developer React TypeScript Redux",
            "candidates": [
                {"id": "A", "text": "Senior Software Engineer React TypeScript Redux six years"}
            ]
        });
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/rankings")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = app_with(config).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_screenings_over_candidate_limit_is_rejected() {
        let config = Config {
            max_candidates: 1,
            ..Config::default()
        };
        let (status, body) = post_json(
            app_with(config),
            "/api/v1/screenings",
            json!({
                "job_description": "Requirements: Rust",
                "resumes": [
                    {"id": "a", "text": "Rust engineer"},
                    {"id": "b", "text": "Python developer"}
                ]
            }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_extract_resume_profile() {
        let (status, body) = post_json(
            app(),
            "/api/v1/extract",
            json!({
                "text": "Contact: jane.doe+hr@example.co.uk for details. React and Node.js.",
                "profile": "resume"
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["profile"], "resume");
        assert_eq!(body["email"], "jane.doe+hr@example.co.uk");
        assert_eq!(body["skills"], json!(["react", "node"]));
    }

    #[tokio::test]
    async fn test_extract_job_description_profile() {
        let (status, body) = post_json(
            app(),
            "/api/v1/extract",
            json!({
                "text": "Qualifications: Rust, Tokio\n\nAbout us",
                "profile": "job_description"
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["profile"], "job_description");
        assert_eq!(body["requirements"], "Rust, Tokio");
        assert_eq!(body["skills"], json!(["rust"]));
    }

    #[tokio::test]
    async fn test_screenings_endpoint() {
        let (status, body) = post_json(
            app(),
            "/api/v1/screenings",
            json!({
                "job_description": "Requirements: Rust, Docker\n\nRemote role",
                "resumes": [
                    {"id": "x", "text": "Florist"},
                    {"id": "y", "text": "Rust and Docker engineer"},
                    {"id": "z", "text": "Pastry chef"},
                    {"id": "w", "text": "Airline pilot"}
                ]
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["required_skills"], json!(["rust", "docker"]));
        assert_eq!(body["candidates"][0]["candidate_id"], "y");
        assert_eq!(
            body["candidates"][0]["matched_skills"],
            json!(["rust", "docker"])
        );
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let (status, body) = post_json(app(), "/api/v1/nope", json!({})).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }
}
