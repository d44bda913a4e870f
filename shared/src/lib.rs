//! Shared types for the storefront
//!
//! Common types used by the store server and its clients: error codes,
//! the API error envelope, and the catalog / account / order / review models.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
