//! Stock routes

use axum::{Router, routing::get, routing::put};

use crate::core::ServerState;

pub mod handler;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/stocks", get(handler::list).post(handler::create))
        .route("/api/stocks/quantity", put(handler::update_quantity))
        .route("/api/stocks/minimum", get(handler::minimum))
        .route(
            "/api/stocks/{store_id}/{product_id}",
            get(handler::get),
        )
}
