//! Service-layer error type
//!
//! `ServiceError` carries every business outcome as a typed variant so the
//! façade can map it without guessing. Storage faults are opaque: they keep
//! their detail for the server log and reach the client only as a generic
//! server error.

use axum::response::IntoResponse;
use shared::error::{AppError, ErrorCode};
use thiserror::Error;

use crate::credential::CredentialError;
use crate::db::repository::RepoError;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Malformed or missing caller input
    #[error("{message}")]
    Validation { code: ErrorCode, message: String },

    /// Uniqueness violation
    #[error("{message}")]
    Conflict { code: ErrorCode, message: String },

    #[error("{0} not found")]
    NotFound(String),

    #[error("Product is out of stock")]
    OutOfStock,

    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Storage or infrastructure fault
    #[error("storage error: {0}")]
    Storage(BoxError),
}

impl ServiceError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            code: ErrorCode::ValidationFailed,
            message: message.into(),
        }
    }

    pub fn invalid(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Validation {
            code,
            message: message.into(),
        }
    }

    pub fn conflict(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Conflict {
            code,
            message: message.into(),
        }
    }

    pub fn storage(err: impl Into<BoxError>) -> Self {
        Self::Storage(err.into())
    }
}

impl From<RepoError> for ServiceError {
    fn from(e: RepoError) -> Self {
        match e {
            RepoError::NotFound(what) => ServiceError::NotFound(what),
            RepoError::Duplicate(msg) => ServiceError::conflict(ErrorCode::AlreadyExists, msg),
            RepoError::Validation(msg) => ServiceError::validation(msg),
            RepoError::Database(msg) => ServiceError::Storage(msg.into()),
        }
    }
}

impl From<sqlx::Error> for ServiceError {
    fn from(e: sqlx::Error) -> Self {
        RepoError::from(e).into()
    }
}

impl From<CredentialError> for ServiceError {
    fn from(e: CredentialError) -> Self {
        ServiceError::Storage(e.into())
    }
}

impl From<tokio::task::JoinError> for ServiceError {
    fn from(e: tokio::task::JoinError) -> Self {
        ServiceError::Storage(e.into())
    }
}

impl From<ServiceError> for AppError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation { code, message } => AppError::with_message(code, message),
            ServiceError::Conflict { code, message } => AppError::with_message(code, message),
            ServiceError::NotFound(what) => AppError::not_found(what),
            ServiceError::OutOfStock => AppError::out_of_stock(),
            ServiceError::InvalidCredentials => AppError::invalid_credentials(),
            // Logged once by `AppError::into_response`; the body gets the generic message
            ServiceError::Storage(err) => {
                AppError::with_message(ErrorCode::InternalError, err.to_string())
            }
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> axum::response::Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

/// Convenience type alias for service-layer results
pub type ServiceResult<T> = Result<T, ServiceError>;
