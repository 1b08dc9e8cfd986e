//! Utility module - shared helpers and types
//!
//! # Contents
//!
//! - [`AppError`] - application error type (from shared::error)
//! - [`ApiResponse`] - API response structure (from shared::error)
//! - logging, validation and money helpers

pub mod error;
pub mod logger;
pub mod money;
pub mod result;
pub mod validation;

// Re-export error types from the error module (which re-exports from shared)
pub use error::{ApiResponse, AppError, ErrorCategory, ErrorCode};
pub use result::AppResult;
