//! HTTP server module

mod api;
mod exam;
mod practice;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::AppState;

pub use api::{HealthResponse, StatusResponse};
pub use practice::{PracticeAnswerParams, PracticeAnswerResponse};

/// Create the HTTP router with all routes configured
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(api::status))
        .route("/health", get(api::health))
        .route("/subjects", get(api::list_subjects))
        // The router needs one parameter name per position: the segment is a
        // subject on the first route and a question id on the second.
        .route("/practice/:segment", get(practice::practice_question))
        .route("/practice/:segment/answer", post(practice::answer_practice))
        .route("/exam/start", get(exam::start_exam))
        .route("/exam/submit", post(exam::submit_exam))
        .route("/exam/review", post(exam::review_exam))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_test::TestServer;
    use examprep_core::testing::bank;

    #[tokio::test]
    async fn test_router_has_every_endpoint() {
        let state = Arc::new(AppState::new(bank(60, &["Banking"])));
        let server = TestServer::new(create_router(state)).unwrap();

        server.get("/").await.assert_status_ok();
        server.get("/health").await.assert_status_ok();
        server.get("/subjects").await.assert_status_ok();
        server.get("/practice/Banking").await.assert_status_ok();
        server
            .post("/practice/1/answer")
            .add_query_param("selected_key", "A")
            .await
            .assert_status_ok();
        server.get("/exam/start").await.assert_status_ok();
        server
            .post("/exam/submit")
            .json(&serde_json::json!({}))
            .await
            .assert_status_ok();
        server
            .post("/exam/review")
            .json(&serde_json::json!({}))
            .await
            .assert_status_ok();
    }
}
