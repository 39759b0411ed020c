//! End-to-end practice and exam flows over a real socket

mod common;

use std::collections::HashMap;

use examprep_core::testing::{bank, fixture_correct_key, fixture_wrong_key};
use examprep_core::{ExamReview, ExamScore, ExamStart, PublicQuestion};
use examprep_server::http::PracticeAnswerResponse;
use examprep_server::{ErrorResponse, ServerConfig};
use serde_json::json;

#[tokio::test]
async fn practice_question_then_answer() {
    let (_state, addr) = common::create_test_server(bank(20, &["Banking", "Law"])).await;
    let client = reqwest::Client::new();

    let question: PublicQuestion = client
        .get(format!("http://{addr}/practice/Law"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(question.subject, "Law");

    let feedback: PracticeAnswerResponse = client
        .post(format!("http://{addr}/practice/{}/answer", question.id))
        .query(&[("selected_key", fixture_correct_key(question.id))])
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(feedback.correct);
    assert_eq!(feedback.correct_answer, fixture_correct_key(question.id));
}

#[tokio::test]
async fn exam_start_submit_review() {
    let (state, addr) = common::create_test_server(bank(100, &["Banking", "Law", "Insurance"])).await;
    let client = reqwest::Client::new();

    let exam: ExamStart = client
        .get(format!("http://{addr}/exam/start"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(exam.questions.len(), state.format.question_count);

    // 44 right answers: one short of the pass mark
    let sheet: HashMap<String, &str> = exam
        .questions
        .iter()
        .enumerate()
        .map(|(index, question)| {
            let key = if index < 44 {
                fixture_correct_key(question.id)
            } else {
                fixture_wrong_key(question.id)
            };
            (question.id.to_string(), key)
        })
        .collect();

    let score: ExamScore = client
        .post(format!("http://{addr}/exam/submit"))
        .json(&sheet)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(score.score, 44);
    assert!(!score.passed);
    assert_eq!(score.required, 45);

    let review: ExamReview = client
        .post(format!("http://{addr}/exam/review"))
        .json(&sheet)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(review.summary(), score);
    assert_eq!(review.review.len(), 60);
    assert_eq!(
        review.review.iter().filter(|entry| entry.user_correct).count(),
        44
    );
}

#[tokio::test]
async fn exam_start_reports_insufficient_bank() {
    let (_state, addr) = common::create_test_server(bank(10, &["Banking"])).await;

    let response = reqwest::get(format!("http://{addr}/exam/start")).await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);

    let body: ErrorResponse = response.json().await.unwrap();
    assert!(body.detail.contains("10 available"));
}

#[tokio::test]
async fn malformed_submission_is_client_error() {
    let (_state, addr) = common::create_test_server(bank(60, &["Banking"])).await;

    let response = reqwest::Client::new()
        .post(format!("http://{addr}/exam/submit"))
        .json(&json!("not an answer sheet"))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn cors_preflight_allows_configured_origin() {
    let (_state, addr) = common::create_test_server(bank(5, &["Banking"])).await;

    let response = reqwest::Client::new()
        .request(reqwest::Method::OPTIONS, format!("http://{addr}/exam/submit"))
        .header("Origin", "http://localhost:5173")
        .header("Access-Control-Request-Method", "POST")
        .send()
        .await
        .unwrap();

    assert!(response.status().is_success());
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "http://localhost:5173"
    );
}

#[tokio::test]
async fn cors_headers_absent_when_disabled() {
    let config = ServerConfig {
        cors_origins: Vec::new(),
        ..ServerConfig::default()
    };
    let (_state, addr) = common::create_test_server_with_config(bank(5, &["Banking"]), config).await;

    let response = reqwest::Client::new()
        .get(format!("http://{addr}/health"))
        .header("Origin", "http://localhost:5173")
        .send()
        .await
        .unwrap();

    assert!(response.status().is_success());
    assert!(response.headers().get("access-control-allow-origin").is_none());
}
