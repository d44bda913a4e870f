//! Unified error codes for the storefront
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Account / authentication errors
//! - 6xxx: Product errors
//! - 7xxx: Review errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Account ====================
    /// Invalid credentials (username/password)
    InvalidCredentials = 1002,
    /// Email address is already registered
    EmailExists = 1010,
    /// Username is already taken
    UsernameExists = 1011,
    /// Email address is malformed
    InvalidEmail = 1012,

    // ==================== 6xxx: Product ====================
    /// Product price is invalid
    ProductInvalidPrice = 6002,
    /// Product is out of stock
    ProductOutOfStock = 6003,
    /// Product id already used
    ProductIdExists = 6004,
    /// Product search requires at least one filter
    ProductFilterRequired = 6005,

    // ==================== 7xxx: Review ====================
    /// Rating outside 1-5
    ReviewInvalidRating = 7001,
    /// Review targets an unknown product or user
    ReviewTargetInvalid = 7002,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
}

impl ErrorCode {
    /// Numeric value of the code
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Default human-readable message
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Account
            ErrorCode::InvalidCredentials => "Invalid username or password",
            ErrorCode::EmailExists => "Email is already taken",
            ErrorCode::UsernameExists => "Username is already taken",
            ErrorCode::InvalidEmail => "Email address is not valid",

            // Product
            ErrorCode::ProductInvalidPrice => "Product price is invalid",
            ErrorCode::ProductOutOfStock => "Product is out of stock",
            ErrorCode::ProductIdExists => "Product id already exists",
            ErrorCode::ProductFilterRequired => "Must have at least one filter",

            // Review
            ErrorCode::ReviewInvalidRating => "Rating must be an integer between 1 and 5",
            ErrorCode::ReviewTargetInvalid => "Review references an unknown product or user",

            // System
            ErrorCode::InternalError => "An error occurred on the server. Try again later.",
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
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Account
            1002 => Ok(ErrorCode::InvalidCredentials),
            1010 => Ok(ErrorCode::EmailExists),
            1011 => Ok(ErrorCode::UsernameExists),
            1012 => Ok(ErrorCode::InvalidEmail),

            // Product
            6002 => Ok(ErrorCode::ProductInvalidPrice),
            6003 => Ok(ErrorCode::ProductOutOfStock),
            6004 => Ok(ErrorCode::ProductIdExists),
            6005 => Ok(ErrorCode::ProductFilterRequired),

            // Review
            7001 => Ok(ErrorCode::ReviewInvalidRating),
            7002 => Ok(ErrorCode::ReviewTargetInvalid),

            // System
            9001 => Ok(ErrorCode::InternalError),
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

    const ALL: [ErrorCode; 17] = [
        ErrorCode::ValidationFailed,
        ErrorCode::NotFound,
        ErrorCode::AlreadyExists,
        ErrorCode::RequiredField,
        ErrorCode::ValueOutOfRange,
        ErrorCode::InvalidCredentials,
        ErrorCode::EmailExists,
        ErrorCode::UsernameExists,
        ErrorCode::InvalidEmail,
        ErrorCode::ProductInvalidPrice,
        ErrorCode::ProductOutOfStock,
        ErrorCode::ProductIdExists,
        ErrorCode::ProductFilterRequired,
        ErrorCode::ReviewInvalidRating,
        ErrorCode::ReviewTargetInvalid,
        ErrorCode::InternalError,
        ErrorCode::DatabaseError,
    ];

    #[test]
    fn test_try_from_covers_every_code() {
        for code in ALL {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(999), Err(InvalidErrorCode(999)));
        assert_eq!(ErrorCode::try_from(6), Err(InvalidErrorCode(6)));
    }

    #[test]
    fn test_serialize() {
        assert_eq!(serde_json::to_string(&ErrorCode::NotFound).unwrap(), "3");
        assert_eq!(
            serde_json::to_string(&ErrorCode::ProductOutOfStock).unwrap(),
            "6003"
        );
    }

    #[test]
    fn test_deserialize_invalid() {
        let result: Result<ErrorCode, _> = serde_json::from_str("10000");
        assert!(result.is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ErrorCode::ValidationFailed), "2");
        assert_eq!(format!("{}", ErrorCode::InvalidCredentials), "1002");
        assert_eq!(format!("{}", ErrorCode::InternalError), "9001");
    }

    #[test]
    fn test_server_error_message_is_generic() {
        assert_eq!(
            ErrorCode::InternalError.message(),
            "An error occurred on the server. Try again later."
        );
    }

    #[test]
    fn test_invalid_error_code_display() {
        assert_eq!(format!("{}", InvalidErrorCode(999)), "invalid error code: 999");
    }
}
