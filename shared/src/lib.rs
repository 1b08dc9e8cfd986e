//! Shared types for the menu service
//!
//! Common types used by both the server and the client crate: wire models,
//! the unified error system and time helpers.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use axum::{Json, body};
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
