//! Client error types

use serde_json::Value;
use shared::error::ErrorCode;
use std::collections::HashMap;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Structured error returned by the server
    #[error("API error {code}: {message}")]
    Api {
        code: u16,
        message: String,
        details: Option<HashMap<String, Value>>,
    },

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Server error code, when the server sent a structured body
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            ClientError::Api { code, .. } => ErrorCode::try_from(*code).ok(),
            _ => None,
        }
    }

    /// True when the addressed record (or its image) does not exist
    pub fn is_not_found(&self) -> bool {
        match self {
            ClientError::NotFound(_) => true,
            ClientError::Api { .. } => self
                .code()
                .is_some_and(|c| c.http_status() == http::StatusCode::NOT_FOUND),
            _ => false,
        }
    }

    /// True when the server rejected the request as malformed or invalid
    pub fn is_bad_request(&self) -> bool {
        match self {
            ClientError::Validation(_) => true,
            ClientError::Api { .. } => self
                .code()
                .is_some_and(|c| c.http_status() == http::StatusCode::BAD_REQUEST),
            _ => false,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
