//! Product Repository

use super::{RepoError, RepoResult, Tx};
use shared::models::{ProductCreate, ProductFilter, ProductListing};
use sqlx::SqlitePool;

/// Product joined with its rating aggregate and reviewer usernames
const LISTING_SELECT: &str = "SELECT p.product_id, p.name, p.description, p.price, p.stock, p.type, \
     COALESCE(pr.average_rating, 0.0) AS average_rating, \
     COALESCE(pr.num_ratings, 0) AS num_ratings, \
     (SELECT GROUP_CONCAT(DISTINCT r.username) FROM reviews r WHERE r.product_id = p.product_id) AS review_usernames \
     FROM products p LEFT JOIN product_ratings pr ON pr.product_id = p.product_id";

/// Outcome of a conditional stock decrement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockDecrement {
    Decremented,
    NotFound,
    AlreadyZero,
}

pub async fn create(pool: &SqlitePool, data: &ProductCreate) -> RepoResult<()> {
    sqlx::query(
        "INSERT INTO products (product_id, name, description, price, stock, type) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
    )
    .bind(&data.product_id)
    .bind(&data.name)
    .bind(&data.description)
    .bind(data.price)
    .bind(data.stock)
    .bind(&data.product_type)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn find_by_id(pool: &SqlitePool, product_id: &str) -> RepoResult<Option<ProductListing>> {
    let sql = format!("{LISTING_SELECT} WHERE p.product_id = ?");
    let row = sqlx::query_as::<_, ProductListing>(&sql)
        .bind(product_id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<ProductListing>> {
    let sql = format!("{LISTING_SELECT} ORDER BY p.product_id");
    let rows = sqlx::query_as::<_, ProductListing>(&sql)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

/// Filtered listing. Name is a case-insensitive substring match, type is
/// exact, max price is inclusive. Every present filter applies; an infinite
/// max price matches every price.
pub async fn search(pool: &SqlitePool, filter: &ProductFilter) -> RepoResult<Vec<ProductListing>> {
    if filter.is_empty() {
        return Err(RepoError::Validation("at least one filter is required".into()));
    }

    let mut conditions = Vec::new();
    if filter.name.is_some() {
        conditions.push("instr(lower(p.name), lower(?)) > 0");
    }
    if filter.product_type.is_some() {
        conditions.push("p.type = ?");
    }
    // A non-finite cap is a supplied filter with no upper bound
    let max_price = filter.max_price.filter(|p| p.is_finite());
    if max_price.is_some() {
        conditions.push("p.price <= ?");
    }
    let sql = if conditions.is_empty() {
        format!("{LISTING_SELECT} ORDER BY p.product_id")
    } else {
        format!(
            "{LISTING_SELECT} WHERE {} ORDER BY p.product_id",
            conditions.join(" AND ")
        )
    };

    let mut query = sqlx::query_as::<_, ProductListing>(&sql);
    if let Some(name) = &filter.name {
        query = query.bind(name);
    }
    if let Some(product_type) = &filter.product_type {
        query = query.bind(product_type);
    }
    if let Some(max_price) = max_price {
        query = query.bind(max_price);
    }
    Ok(query.fetch_all(pool).await?)
}

/// Take one unit of stock. The write is conditional so that concurrent
/// buyers of the last unit cannot both succeed.
pub async fn decrement_stock(tx: &mut Tx<'_>, product_id: &str) -> RepoResult<StockDecrement> {
    let rows = sqlx::query("UPDATE products SET stock = stock - 1 WHERE product_id = ? AND stock > 0")
        .bind(product_id)
        .execute(&mut **tx)
        .await?;
    if rows.rows_affected() == 1 {
        return Ok(StockDecrement::Decremented);
    }

    let exists: Option<i64> = sqlx::query_scalar("SELECT 1 FROM products WHERE product_id = ?")
        .bind(product_id)
        .fetch_optional(&mut **tx)
        .await?;
    Ok(match exists {
        Some(_) => StockDecrement::AlreadyZero,
        None => StockDecrement::NotFound,
    })
}

pub async fn find_price(tx: &mut Tx<'_>, product_id: &str) -> RepoResult<f64> {
    sqlx::query_scalar::<_, f64>("SELECT price FROM products WHERE product_id = ?")
        .bind(product_id)
        .fetch_optional(&mut **tx)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Product {product_id}")))
}

pub async fn find_stock(pool: &SqlitePool, product_id: &str) -> RepoResult<Option<i64>> {
    let stock = sqlx::query_scalar::<_, i64>("SELECT stock FROM products WHERE product_id = ?")
        .bind(product_id)
        .fetch_optional(pool)
        .await?;
    Ok(stock)
}
