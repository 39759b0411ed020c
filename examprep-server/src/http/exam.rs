//! Mock exam endpoints

use std::sync::Arc;

use axum::{Json, extract::State};
use chrono::Utc;
use examprep_core::{AnswerSubmission, ExamReview, ExamScore, ExamStart};

use crate::AppState;
use crate::error::ApiError;

/// GET /exam/start - Draw a new exam
pub async fn start_exam(State(state): State<Arc<AppState>>) -> Result<Json<ExamStart>, ApiError> {
    let exam = state.exams().start(state.sampler.as_ref(), Utc::now())?;
    Ok(Json(exam))
}

/// POST /exam/submit - Score an answer sheet
pub async fn submit_exam(
    State(state): State<Arc<AppState>>,
    Json(submission): Json<AnswerSubmission>,
) -> Json<ExamScore> {
    let score = state.exams().submit(&submission);
    tracing::info!(
        answered = submission.len(),
        score = score.score,
        passed = score.passed,
        "exam submitted"
    );
    Json(score)
}

/// POST /exam/review - Score an answer sheet and reveal the answered keys
pub async fn review_exam(
    State(state): State<Arc<AppState>>,
    Json(submission): Json<AnswerSubmission>,
) -> Json<ExamReview> {
    Json(state.exams().review(&submission))
}
