//! Input validation helpers
//!
//! Centralized text length constants and validation functions.
//! Limits mirror the column sizes of the relational schema the catalog
//! was designed against; SQLite TEXT has no built-in length enforcement.

use crate::utils::{AppError, ErrorCode};

// ── Text length limits ──────────────────────────────────────────────

/// Menu item names
pub const MAX_NAME_LEN: usize = 100;

/// Menu item categories
pub const MAX_CATEGORY_LEN: usize = 50;

/// Customer first / last names
pub const MAX_PERSON_NAME_LEN: usize = 50;

/// Customer email addresses
pub const MAX_EMAIL_LEN: usize = 100;

/// Customer phone numbers
pub const MAX_PHONE_LEN: usize = 20;

// ── Image limits ────────────────────────────────────────────────────

/// Maximum image payload (2 MiB)
pub const MAX_IMAGE_SIZE: usize = 2 * 1024 * 1024;

/// Accepted image content types
pub const ALLOWED_IMAGE_TYPES: &[&str] = &["image/jpeg", "image/png", "image/gif"];

// ── Validation helpers (CRUD handlers) ──────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty"))
            .with_detail("field", field));
    }
    let len = value.chars().count();
    if len > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({len} chars, max {max_len})"
        ))
        .with_detail("field", field));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value {
        let len = v.chars().count();
        if len > max_len {
            return Err(AppError::validation(format!(
                "{field} is too long ({len} chars, max {max_len})"
            ))
            .with_detail("field", field));
        }
    }
    Ok(())
}

/// Validate an email address: required, bounded, and shaped like `local@domain`.
pub fn validate_email(value: &str) -> Result<(), AppError> {
    validate_required_text(value, "email", MAX_EMAIL_LEN)?;
    let valid = value
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty())
        && !value.chars().any(char::is_whitespace);
    if !valid {
        return Err(AppError::validation(format!("email '{value}' is not a valid address"))
            .with_detail("field", "email"));
    }
    Ok(())
}

// ── Validation helpers (images) ─────────────────────────────────────

/// Validate an image payload against the upload rules.
///
/// Checked in order: empty file, content type, size.
pub fn validate_image(data: &[u8], content_type: &str) -> Result<(), AppError> {
    if data.is_empty() {
        return Err(AppError::new(ErrorCode::EmptyFile));
    }

    let content_type = content_type.trim().to_ascii_lowercase();
    if !ALLOWED_IMAGE_TYPES.contains(&content_type.as_str()) {
        return Err(AppError::with_message(
            ErrorCode::UnsupportedFileFormat,
            "Invalid file type. Only JPEG, PNG and GIF are allowed",
        )
        .with_detail("contentType", content_type));
    }

    if data.len() > MAX_IMAGE_SIZE {
        return Err(AppError::with_message(
            ErrorCode::FileTooLarge,
            format!(
                "File size exceeds the limit of {} bytes (2MB)",
                MAX_IMAGE_SIZE
            ),
        )
        .with_detail("size", data.len()));
    }

    Ok(())
}

/// Validate an optional image pair supplied inside a create/update body.
pub fn validate_image_pair(
    data: &Option<Vec<u8>>,
    mime_type: &Option<String>,
) -> Result<(), AppError> {
    match (data, mime_type) {
        (None, None) => Ok(()),
        (Some(data), Some(mime_type)) => validate_image(data, mime_type),
        _ => Err(AppError::new(ErrorCode::ImagePairIncomplete)),
    }
}
