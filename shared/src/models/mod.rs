//! Data models
//!
//! Shared between store-server and its clients (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.

pub mod order;
pub mod product;
pub mod review;
pub mod user;

// Re-exports
pub use order::*;
pub use product::*;
pub use review::*;
pub use user::*;
