//! Status and catalogue handlers

use std::sync::Arc;

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::AppState;

/// Root status response
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub message: String,
    /// Number of questions in the bank
    pub questions: usize,
    /// Number of subjects in the bank
    pub subjects: usize,
}

/// GET / - Bank summary
pub async fn status(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    Json(StatusResponse {
        message: "examprep practice backend is running".to_string(),
        questions: state.bank.len(),
        subjects: state.bank.subject_count(),
    })
}

/// Liveness probe body
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always "ok" while the process answers
    pub status: String,
    pub version: String,
    pub uptime_seconds: i64,
    /// Size of the loaded bank
    pub questions: usize,
}

/// GET /health
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime_seconds(),
        questions: state.bank.len(),
    })
}

/// GET /subjects - Sorted subject names
pub async fn list_subjects(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    Json(state.bank.subjects().map(str::to_string).collect())
}
