//! Unified error handling
//!
//! Re-exports the shared error system and adds the conversions that only
//! make sense on the server side. Services map repository errors explicitly
//! through [`internal_with_context`].
//!
//! # Usage
//!
//! ```ignore
//! // Return an error
//! Err(AppError::with_message(ErrorCode::MenuItemNotFound, "Menu item with ID 4 not found"))
//!
//! // Return a message-only success body
//! Ok(ApiResponse::ok_with_message("Image removed successfully"))
//! ```

use axum::extract::multipart::MultipartError;

pub use shared::error::{ApiResponse, AppError, ErrorCategory, ErrorCode};

/// Convert a multipart parsing failure into a BadRequest
pub fn multipart_error(err: MultipartError) -> AppError {
    AppError::validation(format!("Invalid multipart request: {}", err))
}

/// Internal error carrying the underlying failure both in the message and in `details.error`
pub fn internal_with_context(context: &str, err: impl std::fmt::Display) -> AppError {
    let detail = err.to_string();
    AppError::database(format!("{context}: {detail}")).with_detail("error", detail)
}
