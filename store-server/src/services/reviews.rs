//! Review Aggregator
//!
//! Inserting a review and recomputing its product's aggregate happen in one
//! transaction. The insert goes first so the write lock is held before the
//! aggregate is read; concurrent reviewers of the same product serialize.

use shared::ErrorCode;
use shared::models::{RatingSummary, ReviewCreate};
use sqlx::SqlitePool;
use tracing::instrument;

use crate::db::repository::{RepoError, review};
use crate::error::{ServiceError, ServiceResult};
use crate::utils::money;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text,
    validate_required_text,
};

pub const MIN_RATING: i64 = 1;
pub const MAX_RATING: i64 = 5;

/// Record a review and return the product's fresh aggregate
/// (average rounded to 2 decimal places).
#[instrument(skip(pool, data), fields(product_id = %data.product_id, username = %data.username))]
pub async fn submit_review(pool: &SqlitePool, data: ReviewCreate) -> ServiceResult<RatingSummary> {
    if !(MIN_RATING..=MAX_RATING).contains(&data.rating) {
        return Err(ServiceError::invalid(
            ErrorCode::ReviewInvalidRating,
            format!("rating must be between {MIN_RATING} and {MAX_RATING}, got {}", data.rating),
        ));
    }
    validate_required_text(&data.username, "username", MAX_NAME_LEN)?;
    validate_required_text(&data.product_id, "product_id", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(data.comment.as_deref(), "comment", MAX_NOTE_LEN)?;

    let mut tx = pool.begin().await?;

    let review_id = review::insert(
        &mut tx,
        &data.username,
        &data.product_id,
        data.rating,
        data.comment.as_deref(),
        shared::util::now_millis(),
    )
    .await
    .map_err(|e| match e {
        RepoError::Validation(_) => ServiceError::invalid(
            ErrorCode::ReviewTargetInvalid,
            ErrorCode::ReviewTargetInvalid.message(),
        ),
        other => other.into(),
    })?;

    let (average_rating, num_ratings) = review::compute_aggregate(&mut tx, &data.product_id).await?;
    review::upsert_aggregate(&mut tx, &data.product_id, average_rating, num_ratings).await?;
    tx.commit().await?;

    tracing::info!(review_id, average_rating, num_ratings, "Review recorded");
    Ok(RatingSummary {
        average_rating: money::round2(average_rating),
        num_ratings,
    })
}
