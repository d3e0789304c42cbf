//! Order item routes
//!
//! Lines are addressed by their natural key (order id, item id).

use axum::{Router, routing::get, routing::put};

use crate::core::ServerState;

pub mod handler;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/order-items", get(handler::list).post(handler::create))
        .route(
            "/api/order-items/bill/{order_id}/{item_id}",
            get(handler::bill),
        )
        .route(
            "/api/order-items/bill-without-discount/{order_id}/{item_id}",
            get(handler::bill_without_discount),
        )
        .route("/api/order-items/approve", put(handler::set_approved))
        .route(
            "/api/order-items/{order_id}/{item_id}",
            get(handler::get).put(handler::update),
        )
}
