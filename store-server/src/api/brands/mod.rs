//! Brand routes

use axum::{Router, routing::get};

use crate::core::ServerState;

pub mod handler;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/brands", get(handler::list).post(handler::create))
        .route("/api/brands/{id}", get(handler::get).put(handler::update))
}
