//! HTTP error envelope.
//!
//! # Responsibility
//! - Map store failures and request problems onto HTTP statuses.
//! - Render every failure as `{"error": ..., "code": ...}`.
//!
//! # Invariants
//! - Internal error details are logged, never echoed to the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::{error, warn};
use serde::Serialize;
use std::fmt::{Display, Formatter};
use todo_core::StoreError;

/// Error returned by todo route handlers.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
    code: &'static str,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    code: &'a str,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>, code: &'static str) -> Self {
        Self {
            status,
            message: message.into(),
            code,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message, "BAD_REQUEST")
    }

    pub fn todo_not_found(id: &str) -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            format!("todo not found: {id}"),
            "TODO_NOT_FOUND",
        )
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message, "INTERNAL_ERROR")
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn code(&self) -> &'static str {
        self.code
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}): {}", self.status, self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

impl From<StoreError> for ApiError {
    fn from(value: StoreError) -> Self {
        error!("event=http_request module=api status=error error_code=store_failed error={value}");
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "todo storage is unavailable",
            "STORAGE_ERROR",
        )
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(value: tokio::task::JoinError) -> Self {
        error!("event=http_request module=api status=error error_code=task_failed error={value}");
        Self::internal("request processing failed")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_client_error() {
            warn!(
                "event=http_request module=api status=rejected http_status={} code={}",
                self.status.as_u16(),
                self.code
            );
        }
        let body = ErrorBody {
            error: &self.message,
            code: self.code,
        };
        (self.status, Json(body)).into_response()
    }
}
