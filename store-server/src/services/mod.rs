//! Business services
//!
//! Each service owns one concern of the storefront and talks to SQLite only
//! through the repository layer.
//!
//! - [`account`] - registration and login
//! - [`catalog`] - product catalog and search
//! - [`orders`] - purchases and order history
//! - [`reviews`] - reviews and the per-product rating aggregate

pub mod account;
pub mod catalog;
pub mod orders;
pub mod reviews;
