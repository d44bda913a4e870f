//! Test fixtures shared by the integration tests

#![allow(dead_code)]

use shared::models::ProductCreate;
use sqlx::SqlitePool;
use store_server::services::catalog;
use store_server::{Config, ServerState};
use tempfile::TempDir;

/// A server state over a fresh database; keep the `TempDir` alive
pub async fn test_state() -> (TempDir, ServerState) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.db");
    let config = Config::with_database_path(path.to_str().unwrap());
    let state = ServerState::initialize(&config).await.unwrap();
    (dir, state)
}

pub fn product(id: &str, name: &str, price: f64, stock: i64, product_type: &str) -> ProductCreate {
    ProductCreate {
        product_id: id.into(),
        name: name.into(),
        description: format!("{name} description"),
        price,
        stock,
        product_type: product_type.into(),
    }
}

pub async fn add_product(pool: &SqlitePool, id: &str, price: f64, stock: i64) {
    catalog::add_product(pool, product(id, &format!("Item {id}"), price, stock, "misc"))
        .await
        .unwrap();
}

/// Insert a user row directly, skipping key derivation
pub async fn add_user(pool: &SqlitePool, username: &str) {
    sqlx::query(
        "INSERT INTO users (username, email, salt, hash, created_at) VALUES (?, ?, x'00', x'00', 0)",
    )
    .bind(username)
    .bind(format!("{username}@example.com"))
    .execute(pool)
    .await
    .unwrap();
}
