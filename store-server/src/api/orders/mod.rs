//! Order routes

use axum::{Router, routing::get};

use crate::core::ServerState;

pub mod handler;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/orders", get(handler::list).post(handler::create))
        .route("/api/orders/customer/{id}", get(handler::get_by_customer))
        .route(
            "/api/orders/customer-name/{name}",
            get(handler::get_by_customer_name),
        )
        .route("/api/orders/date/{date}", get(handler::get_by_date))
        .route("/api/orders/status/{status}", get(handler::get_by_status))
        .route("/api/orders/max-date", get(handler::max_date))
        .route("/api/orders/count/{date}", get(handler::count_by_date))
        .route("/api/orders/{id}", get(handler::get).put(handler::update))
}
