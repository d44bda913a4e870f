//! Order API

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/purchase", post(handler::purchase))
        .route("/api/transactions", get(handler::transactions))
}
