//! Staff routes
//!
//! Hiring goes through store accounts; reads and edits require any
//! authenticated user.

use axum::middleware as axum_middleware;
use axum::{Router, routing::get, routing::post, routing::put};

use crate::auth::require_role;
use crate::core::ServerState;

pub mod handler;

pub fn router() -> Router<ServerState> {
    let store = Router::new()
        .route("/api/staffs", post(handler::create))
        .route_layer(axum_middleware::from_fn(require_role("store")));

    let open = Router::new()
        .route("/api/staffs", get(handler::list))
        .route("/api/staffs/store-name/{name}", get(handler::get_by_store_name))
        .route("/api/staffs/{id}/manager", get(handler::get_manager))
        .route("/api/staffs/{id}/sales", get(handler::get_sales))
        .route("/api/staffs/{id}", put(handler::update).patch(handler::patch));

    store.merge(open)
}
