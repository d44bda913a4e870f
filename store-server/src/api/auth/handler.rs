//! Account API Handlers

use axum::{Json, extract::State};
use shared::AppResult;
use shared::error::AppError;
use shared::models::{LoginRequest, LoginResponse, MessageResponse, RegisterRequest};

use crate::api::extract::ValidJson;
use crate::core::ServerState;
use crate::error::ServiceError;
use crate::services::account;

/// POST /api/users - register a new user
pub async fn register(
    State(state): State<ServerState>,
    ValidJson(payload): ValidJson<RegisterRequest>,
) -> AppResult<Json<MessageResponse>> {
    account::register(state.pool(), payload).await?;
    Ok(Json(MessageResponse::new("User created")))
}

/// POST /api/login - check credentials
///
/// Unknown user and wrong password produce the same response.
pub async fn login(
    State(state): State<ServerState>,
    ValidJson(payload): ValidJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    match account::authenticate(state.pool(), payload).await {
        Ok(()) => Ok(Json(LoginResponse { valid: true })),
        Err(ServiceError::NotFound(_) | ServiceError::InvalidCredentials) => {
            Err(AppError::invalid_credentials())
        }
        Err(other) => Err(other.into()),
    }
}
