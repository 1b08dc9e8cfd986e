//! AppError and the JSON envelope used for messages and failures

use super::category::ErrorCategory;
use super::codes::ErrorCode;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Error returned by every service operation
///
/// `message` is what the caller sees; `details` carries machine-readable
/// context such as the offending id or the underlying store error.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Error carrying the code's default message
    pub fn new(code: ErrorCode) -> Self {
        Self::with_message(code, code.message())
    }

    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Attach a detail entry, replacing any previous value under `key`
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    /// Store or transport failure rather than a caller mistake
    pub fn is_system(&self) -> bool {
        self.code.category() == ErrorCategory::System
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Malformed request: bad JSON, bad path parameter
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidRequest, msg)
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::DatabaseError, msg)
    }
}

/// Response body for message-only endpoints and for every failure
///
/// ```json
/// { "code": 6001, "message": "Menu item with ID 4 not found", "details": { "id": 4 } }
/// ```
///
/// `code` is 0 on success. Record-returning endpoints send the record itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

impl ApiResponse {
    /// Success carrying only a confirmation message
    pub fn ok_with_message(message: impl Into<String>) -> Self {
        Self {
            code: Some(ErrorCode::Success.code()),
            message: message.into(),
            details: None,
        }
    }

    pub fn error(err: &AppError) -> Self {
        Self {
            code: Some(err.code.code()),
            message: err.message.clone(),
            details: err.details.clone(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.code, None | Some(0))
    }

    /// Status the envelope is sent with
    pub fn http_status(&self) -> StatusCode {
        match self.code {
            None | Some(0) => StatusCode::OK,
            Some(code) => ErrorCode::try_from(code)
                .map(|c| c.http_status())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        }
    }
}

impl From<AppError> for ApiResponse {
    fn from(err: AppError) -> Self {
        Self {
            code: Some(err.code.code()),
            message: err.message,
            details: err.details,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

// ===== Axum Integration =====

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        if self.is_system() {
            tracing::error!(code = %self.code, message = %self.message, "System error occurred");
        }
        let status = self.http_status();
        (status, axum::Json(ApiResponse::from(self))).into_response()
    }
}

impl axum::response::IntoResponse for ApiResponse {
    fn into_response(self) -> axum::response::Response {
        (self.http_status(), axum::Json(self)).into_response()
    }
}
