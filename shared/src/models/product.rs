//! Product Model

use serde::{Deserialize, Deserializer, Serialize, de};

/// Product entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Product {
    pub product_id: String,
    pub name: String,
    pub description: String,
    /// Catalog price, never negative
    pub price: f64,
    pub stock: i64,
    /// Category tag
    #[serde(rename = "type")]
    #[cfg_attr(feature = "db", sqlx(rename = "type"))]
    pub product_type: String,
}

/// Create product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub product_id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i64,
    #[serde(rename = "type")]
    pub product_type: String,
}

/// Product joined with its rating aggregate (for list/detail views)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct ProductListing {
    pub product_id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i64,
    #[serde(rename = "type")]
    #[cfg_attr(feature = "db", sqlx(rename = "type"))]
    pub product_type: String,
    /// 0 when the product has no reviews
    pub average_rating: f64,
    pub num_ratings: i64,
    /// Comma-joined usernames of reviewers, `None` without reviews
    pub review_usernames: Option<String>,
}

/// Search filters for the filtered product list
///
/// A filter is applied whenever it is present, even if its value is
/// empty or zero. A supplied but blank `maxPrice` is present with no upper
/// bound (`f64::INFINITY`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilter {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub product_type: Option<String>,
    #[serde(default, deserialize_with = "price_cap")]
    pub max_price: Option<f64>,
}

/// Query strings carry text, JSON carries numbers
#[derive(Deserialize)]
#[serde(untagged)]
enum PriceInput {
    Number(f64),
    Text(String),
}

fn price_cap<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match PriceInput::deserialize(deserializer)? {
        PriceInput::Number(v) => v,
        PriceInput::Text(raw) => {
            let raw = raw.trim();
            if raw.is_empty() {
                return Ok(Some(f64::INFINITY));
            }
            raw.parse::<f64>()
                .map_err(|_| de::Error::custom(format!("maxPrice must be a number, got {raw:?}")))?
        }
    };
    if value.is_nan() {
        return Err(de::Error::custom("maxPrice must be a number"));
    }
    Ok(Some(value))
}

impl ProductFilter {
    /// True when no filter key was supplied at all
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.product_type.is_none() && self.max_price.is_none()
    }
}
