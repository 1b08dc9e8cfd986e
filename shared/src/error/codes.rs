//! Unified error codes for the menu service
//!
//! Codes are shared by the server, the client crate and the browser UI.
//! They are organized by range:
//! - 0xxx: General errors
//! - 6xxx: Catalog errors (menu items and their images)
//! - 8xxx: Customer errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Validation failed
    ValidationFailed = 2,
    /// Invalid request
    InvalidRequest = 5,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 6xxx: Catalog ====================
    /// Menu item not found
    MenuItemNotFound = 6001,
    /// Path id and body id disagree
    MenuItemIdMismatch = 6002,
    /// Menu item has an invalid price
    MenuItemInvalidPrice = 6003,
    /// Request body was `null`
    MenuItemMissing = 6004,

    // ==================== 65xx: Menu item image ====================
    /// Menu item has no image attached
    ImageNotFound = 6501,
    /// Image larger than the upload limit
    FileTooLarge = 6502,
    /// Content type outside the allowed set
    UnsupportedFileFormat = 6503,
    /// No file part in the multipart body
    NoFileProvided = 6504,
    /// Zero-byte upload
    EmptyFile = 6505,
    /// Only one of image data / mime type was supplied
    ImagePairIncomplete = 6506,

    // ==================== 8xxx: Customer ====================
    /// Customer not found
    CustomerNotFound = 8001,
    /// Path id and body id disagree
    CustomerIdMismatch = 8002,
    /// Email already registered
    CustomerEmailExists = 8003,
    /// Request body was `null`
    CustomerMissing = 8004,

    // ==================== 9xxx: System ====================
    /// Database error
    DatabaseError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Catalog
            ErrorCode::MenuItemNotFound => "Menu item not found",
            ErrorCode::MenuItemIdMismatch => "Menu item ID mismatch",
            ErrorCode::MenuItemInvalidPrice => "Menu item has an invalid price",
            ErrorCode::MenuItemMissing => "Menu item is null",

            // Image
            ErrorCode::ImageNotFound => "Menu item has no image",
            ErrorCode::FileTooLarge => "File is too large",
            ErrorCode::UnsupportedFileFormat => "Unsupported file format",
            ErrorCode::NoFileProvided => "No file provided",
            ErrorCode::EmptyFile => "No file uploaded",
            ErrorCode::ImagePairIncomplete => {
                "Image data and image MIME type must be provided together"
            }

            // Customer
            ErrorCode::CustomerNotFound => "Customer not found",
            ErrorCode::CustomerIdMismatch => "Customer ID mismatch",
            ErrorCode::CustomerEmailExists => "Customer email already exists",
            ErrorCode::CustomerMissing => "Customer is null",

            // System
            ErrorCode::DatabaseError => "Database error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            2 => Ok(ErrorCode::ValidationFailed),
            5 => Ok(ErrorCode::InvalidRequest),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Catalog
            6001 => Ok(ErrorCode::MenuItemNotFound),
            6002 => Ok(ErrorCode::MenuItemIdMismatch),
            6003 => Ok(ErrorCode::MenuItemInvalidPrice),
            6004 => Ok(ErrorCode::MenuItemMissing),

            // Image
            6501 => Ok(ErrorCode::ImageNotFound),
            6502 => Ok(ErrorCode::FileTooLarge),
            6503 => Ok(ErrorCode::UnsupportedFileFormat),
            6504 => Ok(ErrorCode::NoFileProvided),
            6505 => Ok(ErrorCode::EmptyFile),
            6506 => Ok(ErrorCode::ImagePairIncomplete),

            // Customer
            8001 => Ok(ErrorCode::CustomerNotFound),
            8002 => Ok(ErrorCode::CustomerIdMismatch),
            8003 => Ok(ErrorCode::CustomerEmailExists),
            8004 => Ok(ErrorCode::CustomerMissing),

            // System
            9002 => Ok(ErrorCode::DatabaseError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::ValueOutOfRange.code(), 8);

        assert_eq!(ErrorCode::MenuItemNotFound.code(), 6001);
        assert_eq!(ErrorCode::MenuItemIdMismatch.code(), 6002);
        assert_eq!(ErrorCode::ImageNotFound.code(), 6501);
        assert_eq!(ErrorCode::FileTooLarge.code(), 6502);
        assert_eq!(ErrorCode::ImagePairIncomplete.code(), 6506);

        assert_eq!(ErrorCode::CustomerNotFound.code(), 8001);
        assert_eq!(ErrorCode::CustomerEmailExists.code(), 8003);

        assert_eq!(ErrorCode::DatabaseError.code(), 9002);
    }

    #[test]
    fn test_is_success() {
        assert!(ErrorCode::Success.is_success());
        assert!(!ErrorCode::MenuItemNotFound.is_success());
        assert!(!ErrorCode::DatabaseError.is_success());
    }

    #[test]
    fn test_try_from_valid() {
        assert_eq!(ErrorCode::try_from(0), Ok(ErrorCode::Success));
        assert_eq!(ErrorCode::try_from(6001), Ok(ErrorCode::MenuItemNotFound));
        assert_eq!(ErrorCode::try_from(6505), Ok(ErrorCode::EmptyFile));
        assert_eq!(ErrorCode::try_from(8002), Ok(ErrorCode::CustomerIdMismatch));
        assert_eq!(ErrorCode::try_from(9002), Ok(ErrorCode::DatabaseError));
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(999), Err(InvalidErrorCode(999)));
        assert_eq!(ErrorCode::try_from(4001), Err(InvalidErrorCode(4001)));
        assert_eq!(ErrorCode::try_from(10000), Err(InvalidErrorCode(10000)));
        // Retired general and system codes
        assert_eq!(ErrorCode::try_from(3), Err(InvalidErrorCode(3)));
        assert_eq!(ErrorCode::try_from(9001), Err(InvalidErrorCode(9001)));
        assert_eq!(ErrorCode::try_from(9004), Err(InvalidErrorCode(9004)));
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&ErrorCode::ValueOutOfRange).unwrap();
        assert_eq!(json, "8");

        let json = serde_json::to_string(&ErrorCode::MenuItemNotFound).unwrap();
        assert_eq!(json, "6001");
    }

    #[test]
    fn test_deserialize() {
        let code: ErrorCode = serde_json::from_str("6503").unwrap();
        assert_eq!(code, ErrorCode::UnsupportedFileFormat);

        let result: Result<ErrorCode, _> = serde_json::from_str("999");
        assert!(result.is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ErrorCode::Success), "0");
        assert_eq!(format!("{}", ErrorCode::ImageNotFound), "6501");
    }

    #[test]
    fn test_message() {
        assert_eq!(ErrorCode::MenuItemIdMismatch.message(), "Menu item ID mismatch");
        assert_eq!(ErrorCode::EmptyFile.message(), "No file uploaded");
        assert_eq!(ErrorCode::DatabaseError.message(), "Database error");
    }

    #[test]
    fn test_every_code_roundtrips_through_u16() {
        let codes = [
            ErrorCode::Success,
            ErrorCode::MenuItemMissing,
            ErrorCode::NoFileProvided,
            ErrorCode::CustomerMissing,
            ErrorCode::ValueOutOfRange,
            ErrorCode::DatabaseError,
        ];

        for code in codes {
            assert_eq!(ErrorCode::try_from(u16::from(code)), Ok(code));
        }
    }
}
