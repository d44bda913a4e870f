//! Order Model

use serde::{Deserialize, Serialize};

/// Order entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Order {
    /// Public confirmation code
    pub order_id: String,
    pub product_id: String,
    pub username: String,
    /// Catalog price at purchase time
    pub total_amount: f64,
    pub created_at: i64,
}

/// Purchase payload
///
/// Unknown fields (such as a client-computed `cost`) are ignored; the
/// charged amount always comes from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub product_id: String,
}

/// Successful purchase body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseReceipt {
    pub confirmation_code: String,
}

/// One row of a user's order history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Transaction {
    pub order_id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub product_id: String,
    pub total_amount: f64,
}

/// Query for the order history endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionQuery {
    pub username: Option<String>,
}
