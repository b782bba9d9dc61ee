use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::judge_client::JudgeError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Compile and runtime failures of user code are NOT errors here; they travel
/// inside a successful `Verdict`. Only request validation and judge
/// infrastructure failures surface as `AppError`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    #[error("Invalid language: {0}")]
    InvalidLanguage(String),

    #[error("Execution failed: {0}")]
    ExecutionFailed(#[from] JudgeError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::InvalidBody(rejection) => {
                (rejection.status(), "INVALID_REQUEST", rejection.body_text())
            }
            AppError::InvalidLanguage(msg) => {
                (StatusCode::BAD_REQUEST, "INVALID_LANGUAGE", msg.clone())
            }
            AppError::ExecutionFailed(e) => {
                tracing::error!("Judge execution failed: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "EXECUTION_FAILED",
                    "Failed to run code".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
