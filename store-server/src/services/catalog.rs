//! Catalog Service
//!
//! Product creation and the read paths over the catalog.

use shared::ErrorCode;
use shared::models::{ProductCreate, ProductFilter, ProductListing};
use sqlx::SqlitePool;
use tracing::instrument;

use crate::db::repository::{RepoError, product};
use crate::error::{ServiceError, ServiceResult};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_required_text,
};

fn validate_create(data: &ProductCreate) -> ServiceResult<()> {
    validate_required_text(&data.product_id, "product_id", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&data.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&data.description, "description", MAX_NOTE_LEN)?;
    validate_required_text(&data.product_type, "type", MAX_SHORT_TEXT_LEN)?;
    if !data.price.is_finite() || data.price < 0.0 {
        return Err(ServiceError::invalid(
            ErrorCode::ProductInvalidPrice,
            format!("price must be a non-negative number, got {}", data.price),
        ));
    }
    if data.stock < 0 {
        return Err(ServiceError::invalid(
            ErrorCode::ValueOutOfRange,
            format!("stock must be non-negative, got {}", data.stock),
        ));
    }
    Ok(())
}

#[instrument(skip(pool, data), fields(product_id = %data.product_id))]
pub async fn add_product(pool: &SqlitePool, data: ProductCreate) -> ServiceResult<()> {
    validate_create(&data)?;
    product::create(pool, &data).await.map_err(|e| match e {
        RepoError::Duplicate(_) => ServiceError::conflict(
            ErrorCode::ProductIdExists,
            format!("Product {} already exists", data.product_id),
        ),
        other => other.into(),
    })?;
    tracing::info!(stock = data.stock, price = data.price, "Product added");
    Ok(())
}

pub async fn get_product(pool: &SqlitePool, product_id: &str) -> ServiceResult<ProductListing> {
    product::find_by_id(pool, product_id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("Product {product_id}")))
}

/// Unfiltered listing, no minimum filter
pub async fn list_all_products(pool: &SqlitePool) -> ServiceResult<Vec<ProductListing>> {
    Ok(product::find_all(pool).await?)
}

/// Filtered listing. At least one filter key must be present; a present key
/// applies even when its value is empty or zero.
pub async fn list_products(
    pool: &SqlitePool,
    filter: &ProductFilter,
) -> ServiceResult<Vec<ProductListing>> {
    if filter.is_empty() {
        return Err(ServiceError::invalid(
            ErrorCode::ProductFilterRequired,
            ErrorCode::ProductFilterRequired.message(),
        ));
    }
    Ok(product::search(pool, filter).await?)
}
