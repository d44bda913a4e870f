//! Account API

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/users", post(handler::register))
        .route("/api/login", post(handler::login))
}
