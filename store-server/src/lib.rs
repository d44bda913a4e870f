//! Store Server - storefront backend
//!
//! Product catalog, user accounts, purchases and reviews over SQLite.
//!
//! # Module structure
//!
//! ```text
//! store-server/src/
//! ├── core/          # config, state, HTTP server
//! ├── db/            # SQLite pool + repositories
//! ├── credential.rs  # password hashing, salts, order codes
//! ├── services/      # account, catalog, orders, reviews
//! ├── error.rs       # ServiceError -> AppError
//! ├── api/           # HTTP routes and handlers
//! └── utils/         # logging, validation, money rounding
//! ```

pub mod api;
pub mod core;
pub mod credential;
pub mod db;
pub mod error;
pub mod services;
pub mod utils;

pub use crate::core::{Config, Server, ServerState};
pub use error::{ServiceError, ServiceResult};

// Re-export unified error types from shared
pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env` and install the logger according to the environment
pub fn setup_environment() -> Config {
    let _ = dotenvy::dotenv();
    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    config
}
