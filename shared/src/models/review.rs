//! Review Model

use serde::{Deserialize, Serialize};

/// Review entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Review {
    pub review_id: i64,
    pub username: String,
    pub product_id: String,
    /// 1-5
    pub rating: i64,
    pub comment: Option<String>,
    pub created_at: i64,
}

/// Create review payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewCreate {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub product_id: String,
    pub rating: i64,
    pub comment: Option<String>,
}

/// Per-product rating aggregate, returned after a review is accepted
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingSummary {
    /// Mean rating, rounded to 2 decimal places
    pub average_rating: f64,
    pub num_ratings: i64,
}
