//! Order Repository

use super::{RepoResult, Tx};
use shared::models::{Order, Transaction};
use sqlx::SqlitePool;

/// Insert an order unless its confirmation code is already taken.
///
/// Returns `false` on a code collision so the caller can mint another code.
pub async fn insert_if_absent(tx: &mut Tx<'_>, order: &Order) -> RepoResult<bool> {
    let rows = sqlx::query(
        "INSERT INTO orders (order_id, product_id, username, total_amount, created_at) VALUES (?1, ?2, ?3, ?4, ?5) ON CONFLICT(order_id) DO NOTHING",
    )
    .bind(&order.order_id)
    .bind(&order.product_id)
    .bind(&order.username)
    .bind(order.total_amount)
    .bind(order.created_at)
    .execute(&mut **tx)
    .await?;
    Ok(rows.rows_affected() == 1)
}

pub async fn find_by_id(pool: &SqlitePool, order_id: &str) -> RepoResult<Option<Order>> {
    let row = sqlx::query_as::<_, Order>(
        "SELECT order_id, product_id, username, total_amount, created_at FROM orders WHERE order_id = ?",
    )
    .bind(order_id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// Order history for one user, newest first
pub async fn find_transactions(pool: &SqlitePool, username: &str) -> RepoResult<Vec<Transaction>> {
    let rows = sqlx::query_as::<_, Transaction>(
        "SELECT o.order_id, p.name, p.description, p.price, p.product_id, o.total_amount \
         FROM orders o JOIN products p ON o.product_id = p.product_id \
         WHERE o.username = ? ORDER BY o.created_at DESC, o.rowid DESC",
    )
    .bind(username)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
