//! Category routes

use axum::{Router, routing::get};

use crate::core::ServerState;

pub mod handler;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/categories", get(handler::list).post(handler::create))
        .route("/api/categories/name/{name}", get(handler::get_by_name))
        .route(
            "/api/categories/{id}",
            get(handler::get).put(handler::update),
        )
}
