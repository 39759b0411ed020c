//! Server error types

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use examprep_core::{ExamError, GradeError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that stop the examprep server from running
#[derive(Debug, Error)]
pub enum ServerError {
    /// Failed to bind to the specified address
    #[error("failed to bind to {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid server configuration
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Internal server error
    #[error("internal error: {0}")]
    Internal(String),
}

/// Error body returned by every failing endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Request-level failure, rendered as a JSON error response
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Exam(#[from] ExamError),

    #[error(transparent)]
    Grade(#[from] GradeError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Exam(ExamError::SubjectNotFound(_) | ExamError::QuestionNotFound(_)) => {
                StatusCode::NOT_FOUND
            }
            Self::Exam(ExamError::InsufficientData { .. }) => StatusCode::BAD_REQUEST,
            Self::Grade(GradeError::NoCorrectAnswer(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        (
            status,
            Json(ErrorResponse {
                detail: self.to_string(),
            }),
        )
            .into_response()
    }
}
