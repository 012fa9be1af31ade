//! Error handling module for the cellar backend.
//!
//! Provides centralized error types with mapping to HTTP status codes and the
//! `{error}` response envelope the browser client expects.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default messages relayed when the upstream body carries no error detail.
pub mod messages {
    pub const LIST_FAILED: &str = "failed to list wines";
    pub const CREATE_FAILED: &str = "failed to create wine";
    pub const DELETE_FAILED: &str = "failed to delete wine";
    pub const ID_REQUIRED: &str = "wine id is required";
    pub const METHOD_NOT_ALLOWED: &str = "method not allowed";
    pub const SERVER_ERROR_PREFIX: &str = "server error: ";
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// Upstream rejected the request; relayed with its original status.
    /// The error value is whatever the upstream body carried under `error`,
    /// or an operation-specific default message.
    Upstream { status: u16, error: Value },
    /// Missing or invalid client input
    Validation(String),
    /// HTTP method the proxy does not handle
    MethodNotAllowed,
    /// Network failure or malformed upstream response
    Transport(String),
}

impl AppError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Transport(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the value placed under the `error` key of the response body.
    pub fn error_value(&self) -> Value {
        match self {
            AppError::Upstream { error, .. } => error.clone(),
            AppError::Validation(msg) => Value::String(msg.clone()),
            AppError::MethodNotAllowed => {
                Value::String(messages::METHOD_NOT_ALLOWED.to_string())
            }
            AppError::Transport(msg) => {
                Value::String(format!("{}{}", messages::SERVER_ERROR_PREFIX, msg))
            }
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.error_value() {
            Value::String(msg) => write!(f, "{}: {}", self.status_code(), msg),
            other => write!(f, "{}: {}", self.status_code(), other),
        }
    }
}

impl std::error::Error for AppError {}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        tracing::error!("Upstream transport error: {}", err);
        AppError::Transport(err.to_string())
    }
}

/// Error response envelope.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: Value,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: self.error_value(),
        };
        (status, Json(body)).into_response()
    }
}
