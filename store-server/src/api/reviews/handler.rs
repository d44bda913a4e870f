//! Review API Handlers

use axum::{Json, extract::State};
use shared::AppResult;
use shared::models::{RatingSummary, ReviewCreate};

use crate::api::extract::ValidJson;
use crate::core::ServerState;
use crate::services::reviews;

/// POST /api/reviews - rate a product
pub async fn submit(
    State(state): State<ServerState>,
    ValidJson(payload): ValidJson<ReviewCreate>,
) -> AppResult<Json<RatingSummary>> {
    let summary = reviews::submit_review(state.pool(), payload).await?;
    Ok(Json(summary))
}
