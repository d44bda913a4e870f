//! Order API Handlers

use axum::{Json, extract::State};
use shared::AppResult;
use shared::models::{PurchaseReceipt, PurchaseRequest, Transaction, TransactionQuery};

use crate::api::extract::{ValidJson, ValidQuery};
use crate::core::ServerState;
use crate::services::orders;

/// POST /api/purchase - buy one unit of a product
pub async fn purchase(
    State(state): State<ServerState>,
    ValidJson(payload): ValidJson<PurchaseRequest>,
) -> AppResult<Json<PurchaseReceipt>> {
    let confirmation_code =
        orders::purchase(state.pool(), &payload.username, &payload.product_id).await?;
    Ok(Json(PurchaseReceipt { confirmation_code }))
}

/// GET /api/transactions?username= - order history
pub async fn transactions(
    State(state): State<ServerState>,
    ValidQuery(query): ValidQuery<TransactionQuery>,
) -> AppResult<Json<Vec<Transaction>>> {
    let username = query.username.unwrap_or_default();
    let history = orders::transactions(state.pool(), &username).await?;
    Ok(Json(history))
}
