//! Order Processor
//!
//! A purchase is one atomic unit: take a unit of stock, mint a confirmation
//! code, price the order from the catalog and record it. Any failure before
//! commit drops the transaction, which rolls the stock decrement back.

use shared::models::{Order, Transaction};
use sqlx::SqlitePool;
use tracing::instrument;

use crate::credential;
use crate::db::repository::product::StockDecrement;
use crate::db::repository::{RepoError, order, product};
use crate::error::{ServiceError, ServiceResult};
use crate::utils::money;
use crate::utils::validation::{MAX_NAME_LEN, validate_required_text};

/// Confirmation-code collisions tolerated before giving up
const MAX_CODE_ATTEMPTS: u32 = 5;

/// Buy one unit of `product_id` for `username`; returns the confirmation code.
///
/// The amount charged is always the catalog price.
#[instrument(skip(pool))]
pub async fn purchase(pool: &SqlitePool, username: &str, product_id: &str) -> ServiceResult<String> {
    validate_required_text(username, "username", MAX_NAME_LEN)?;

    let mut tx = pool.begin().await?;

    match product::decrement_stock(&mut tx, product_id).await? {
        StockDecrement::Decremented => {}
        StockDecrement::NotFound | StockDecrement::AlreadyZero => {
            tracing::info!("Purchase rejected: out of stock");
            return Err(ServiceError::OutOfStock);
        }
    }

    let price = product::find_price(&mut tx, product_id).await?;
    let total_amount = money::round2(price);

    for attempt in 1..=MAX_CODE_ATTEMPTS {
        let order = Order {
            order_id: credential::generate_order_code()?,
            product_id: product_id.to_string(),
            username: username.to_string(),
            total_amount,
            created_at: shared::util::now_millis(),
        };

        let inserted = order::insert_if_absent(&mut tx, &order)
            .await
            .map_err(|e| match e {
                RepoError::Validation(_) => {
                    ServiceError::validation(format!("Unknown user {username}"))
                }
                other => other.into(),
            })?;

        if inserted {
            tx.commit().await?;
            tracing::info!(order_id = %order.order_id, total_amount, "Purchase completed");
            return Ok(order.order_id);
        }
        tracing::warn!(attempt, "Confirmation code collision, retrying");
    }

    Err(ServiceError::storage(format!(
        "no unique confirmation code after {MAX_CODE_ATTEMPTS} attempts"
    )))
}

/// Order history of one user
pub async fn transactions(pool: &SqlitePool, username: &str) -> ServiceResult<Vec<Transaction>> {
    validate_required_text(username, "username", MAX_NAME_LEN)?;
    Ok(order::find_transactions(pool, username).await?)
}
