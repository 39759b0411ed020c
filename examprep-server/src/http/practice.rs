//! Practice mode: one random question at a time with immediate feedback

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
};
use examprep_core::{ExamError, PublicQuestion, QuestionId, correct_key, grade_selection, pick_one, redact};
use serde::{Deserialize, Serialize};

use crate::AppState;
use crate::error::ApiError;

/// GET /practice/{subject} - Random question of a subject, without its key
pub async fn practice_question(
    State(state): State<Arc<AppState>>,
    Path(subject): Path<String>,
) -> Result<Json<PublicQuestion>, ApiError> {
    let question = pick_one(&state.bank, &subject, state.sampler.as_ref())?;
    Ok(Json(redact(question)))
}

/// Selected answer, from the query string or a JSON body
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct PracticeAnswerParams {
    pub selected_key: Option<String>,
}

/// Practice feedback; the correct key is revealed either way
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PracticeAnswerResponse {
    pub correct: bool,
    pub correct_answer: String,
}

/// POST /practice/{id}/answer - Check one answer
///
/// The query parameter wins over the body. Without either the answer is wrong.
pub async fn answer_practice(
    State(state): State<Arc<AppState>>,
    Path(id): Path<QuestionId>,
    Query(params): Query<PracticeAnswerParams>,
    body: Option<Json<PracticeAnswerParams>>,
) -> Result<Json<PracticeAnswerResponse>, ApiError> {
    let question = state
        .bank
        .get(id)
        .ok_or(ExamError::QuestionNotFound(id))?;
    let key = correct_key(question)?;

    let selected = params
        .selected_key
        .or_else(|| body.and_then(|Json(body)| body.selected_key));

    Ok(Json(PracticeAnswerResponse {
        correct: grade_selection(question, selected.as_deref()),
        correct_answer: key.to_string(),
    }))
}
