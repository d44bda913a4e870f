//! Review Repository

use super::{RepoResult, Tx};
use shared::models::Review;
use sqlx::SqlitePool;

/// Insert a review; the id comes from the table's AUTOINCREMENT sequence
pub async fn insert(
    tx: &mut Tx<'_>,
    username: &str,
    product_id: &str,
    rating: i64,
    comment: Option<&str>,
    created_at: i64,
) -> RepoResult<i64> {
    let result = sqlx::query(
        "INSERT INTO reviews (username, product_id, rating, comment, created_at) VALUES (?1, ?2, ?3, ?4, ?5)",
    )
    .bind(username)
    .bind(product_id)
    .bind(rating)
    .bind(comment)
    .bind(created_at)
    .execute(&mut **tx)
    .await?;
    Ok(result.last_insert_rowid())
}

/// Exact mean and count over every stored rating of a product
pub async fn compute_aggregate(tx: &mut Tx<'_>, product_id: &str) -> RepoResult<(f64, i64)> {
    let (average, count): (Option<f64>, i64) = sqlx::query_as(
        "SELECT AVG(CAST(rating AS REAL)), COUNT(*) FROM reviews WHERE product_id = ?",
    )
    .bind(product_id)
    .fetch_one(&mut **tx)
    .await?;
    Ok((average.unwrap_or(0.0), count))
}

pub async fn upsert_aggregate(
    tx: &mut Tx<'_>,
    product_id: &str,
    average_rating: f64,
    num_ratings: i64,
) -> RepoResult<()> {
    sqlx::query(
        "INSERT INTO product_ratings (product_id, average_rating, num_ratings) VALUES (?1, ?2, ?3) \
         ON CONFLICT(product_id) DO UPDATE SET average_rating = excluded.average_rating, num_ratings = excluded.num_ratings",
    )
    .bind(product_id)
    .bind(average_rating)
    .bind(num_ratings)
    .execute(&mut **tx)
    .await?;
    Ok(())
}

pub async fn find_by_product(pool: &SqlitePool, product_id: &str) -> RepoResult<Vec<Review>> {
    let rows = sqlx::query_as::<_, Review>(
        "SELECT review_id, username, product_id, rating, comment, created_at FROM reviews WHERE product_id = ? ORDER BY review_id",
    )
    .bind(product_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Stored aggregate for a product, `None` before its first review
pub async fn find_aggregate(pool: &SqlitePool, product_id: &str) -> RepoResult<Option<(f64, i64)>> {
    let row: Option<(f64, i64)> = sqlx::query_as(
        "SELECT average_rating, num_ratings FROM product_ratings WHERE product_id = ?",
    )
    .bind(product_id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::RepoError;
    use crate::db::repository::testing::{seed_product, seed_user, test_pool};

    #[tokio::test]
    async fn test_review_ids_increase() {
        let (_dir, pool) = test_pool().await;
        seed_user(&pool, "alice").await;
        seed_product(&pool, "P1", 1.0, 1).await;

        let mut tx = pool.begin().await.unwrap();
        let first = insert(&mut tx, "alice", "P1", 5, None, 1).await.unwrap();
        let second = insert(&mut tx, "alice", "P1", 3, Some("ok"), 2).await.unwrap();
        tx.commit().await.unwrap();

        assert!(second > first);
        let reviews = find_by_product(&pool, "P1").await.unwrap();
        assert_eq!(reviews.len(), 2);
        assert_eq!(reviews[1].comment.as_deref(), Some("ok"));
    }

    #[tokio::test]
    async fn test_aggregate_round_trip() {
        let (_dir, pool) = test_pool().await;
        seed_user(&pool, "alice").await;
        seed_product(&pool, "P1", 1.0, 1).await;

        let mut tx = pool.begin().await.unwrap();
        assert_eq!(compute_aggregate(&mut tx, "P1").await.unwrap(), (0.0, 0));
        for rating in [5, 4] {
            insert(&mut tx, "alice", "P1", rating, None, 1).await.unwrap();
        }
        let (average, count) = compute_aggregate(&mut tx, "P1").await.unwrap();
        upsert_aggregate(&mut tx, "P1", average, count).await.unwrap();
        upsert_aggregate(&mut tx, "P1", average, count).await.unwrap();
        tx.commit().await.unwrap();

        assert_eq!(find_aggregate(&pool, "P1").await.unwrap(), Some((4.5, 2)));
    }

    #[tokio::test]
    async fn test_rating_out_of_range_rejected_by_schema() {
        let (_dir, pool) = test_pool().await;
        seed_user(&pool, "alice").await;
        seed_product(&pool, "P1", 1.0, 1).await;

        let mut tx = pool.begin().await.unwrap();
        assert!(matches!(
            insert(&mut tx, "alice", "P1", 6, None, 1).await,
            Err(RepoError::Validation(_))
        ));
    }
}
