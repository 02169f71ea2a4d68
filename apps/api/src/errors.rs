use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// All variants surface to the caller as a uniform JSON failure body; none
/// crash the process. A sparse-but-valid oracle response is never an error —
/// the merge engine absorbs it through per-field fallbacks.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Unknown action: {0}")]
    UnknownAction(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Oracle unreachable: {0}")]
    OracleUnreachable(String),

    #[error("Malformed oracle response: {0}")]
    MalformedResponse(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<LlmError> for AppError {
    /// Maps adapter failures onto the caller-facing taxonomy. A 401/403 from
    /// the oracle means our credential is bad, which is a configuration
    /// problem, not an oracle outage.
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::Http(e) => AppError::OracleUnreachable(e.to_string()),
            LlmError::Api { status: 401 | 403, message } => AppError::Configuration(format!(
                "oracle rejected credentials: {message}"
            )),
            LlmError::Api { status, message } => {
                AppError::OracleUnreachable(format!("status {status}: {message}"))
            }
            LlmError::Parse(e) => AppError::MalformedResponse(e.to_string()),
            LlmError::EmptyContent => {
                AppError::MalformedResponse("oracle returned empty content".to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "Authentication required".to_string(),
            ),
            AppError::UnknownAction(name) => (
                StatusCode::BAD_REQUEST,
                "UNKNOWN_ACTION",
                format!("Unknown action: {name}"),
            ),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::OracleUnreachable(msg) => {
                tracing::error!("Oracle unreachable: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "ORACLE_UNREACHABLE",
                    "The AI service could not be reached".to_string(),
                )
            }
            AppError::MalformedResponse(msg) => {
                tracing::error!("Malformed oracle response: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "MALFORMED_RESPONSE",
                    "The AI service returned an unusable response".to_string(),
                )
            }
            AppError::Configuration(msg) => {
                tracing::error!("Configuration error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "CONFIGURATION_ERROR",
                    "The service is misconfigured".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
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
