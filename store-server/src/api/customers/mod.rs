//! Customer routes
//!
//! Store accounts read customers and approve them; staff accounts create
//! and edit profiles.

use axum::middleware as axum_middleware;
use axum::{Router, routing::get, routing::post, routing::put};

use crate::auth::require_role;
use crate::core::ServerState;

pub mod handler;

pub fn router() -> Router<ServerState> {
    let store = Router::new()
        .route("/api/customers", get(handler::list))
        .route("/api/customers/zip/{zip}", get(handler::get_by_zip))
        .route("/api/customers/city/{city}", get(handler::get_by_city))
        .route(
            "/api/customers/order-date/{date}",
            get(handler::get_by_order_date),
        )
        .route("/api/customers/highest-order", get(handler::highest_order))
        .route(
            "/api/customers/approve-status",
            put(handler::update_approve_status),
        )
        .route_layer(axum_middleware::from_fn(require_role("store")));

    let staff = Router::new()
        .route("/api/customers", post(handler::create))
        .route("/api/customers/{id}", put(handler::update_full_details))
        .route_layer(axum_middleware::from_fn(require_role("staff")));

    store.merge(staff)
}
