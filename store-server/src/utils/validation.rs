//! Input validation helpers
//!
//! Centralized text length constants and validation functions.
//! SQLite TEXT has no built-in length enforcement.

use crate::error::ServiceError;
use shared::ErrorCode;
use validator::ValidateEmail;

// ── Text length limits ──────────────────────────────────────────────

/// Product names, usernames
pub const MAX_NAME_LEN: usize = 200;

/// Product descriptions, review comments
pub const MAX_NOTE_LEN: usize = 500;

/// Short identifiers: product id, product type
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Passwords (before hashing)
pub const MAX_PASSWORD_LEN: usize = 128;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), ServiceError> {
    if value.trim().is_empty() {
        return Err(ServiceError::invalid(
            ErrorCode::RequiredField,
            format!("{field} is required"),
        ));
    }
    if value.len() > max_len {
        return Err(ServiceError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Passwords are taken verbatim: whitespace counts, only emptiness and
/// length are checked.
pub fn validate_password(value: &str) -> Result<(), ServiceError> {
    if value.is_empty() {
        return Err(ServiceError::invalid(
            ErrorCode::RequiredField,
            "password is required",
        ));
    }
    if value.len() > MAX_PASSWORD_LEN {
        return Err(ServiceError::validation(format!(
            "password is too long ({} chars, max {MAX_PASSWORD_LEN})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: Option<&str>,
    field: &str,
    max_len: usize,
) -> Result<(), ServiceError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(ServiceError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

/// Required, bounded and syntactically an email address
pub fn validate_email(value: &str) -> Result<(), ServiceError> {
    validate_required_text(value, "email", MAX_EMAIL_LEN)?;
    if !value.validate_email() {
        return Err(ServiceError::invalid(
            ErrorCode::InvalidEmail,
            "email is not a valid address",
        ));
    }
    Ok(())
}
