//! Product API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::AppResult;
use shared::models::{MessageResponse, ProductCreate, ProductFilter, ProductListing};

use crate::api::extract::{ValidJson, ValidQuery};
use crate::core::ServerState;
use crate::services::catalog;

/// GET /api/products - every product with its rating aggregate
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<ProductListing>>> {
    let products = catalog::list_all_products(state.pool()).await?;
    Ok(Json(products))
}

/// GET /api/products/search?name=&type=&maxPrice=
pub async fn search(
    State(state): State<ServerState>,
    ValidQuery(filter): ValidQuery<ProductFilter>,
) -> AppResult<Json<Vec<ProductListing>>> {
    let products = catalog::list_products(state.pool(), &filter).await?;
    Ok(Json(products))
}

/// GET /api/products/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ProductListing>> {
    let product = catalog::get_product(state.pool(), &id).await?;
    Ok(Json(product))
}

/// POST /api/products - add a product to the catalog
pub async fn create(
    State(state): State<ServerState>,
    ValidJson(payload): ValidJson<ProductCreate>,
) -> AppResult<Json<MessageResponse>> {
    catalog::add_product(state.pool(), payload).await?;
    Ok(Json(MessageResponse::new("Product added successfully")))
}
