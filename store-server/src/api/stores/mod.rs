//! Store routes

use axum::{Router, routing::get};

use crate::core::ServerState;

pub mod handler;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/stores", get(handler::list).post(handler::create))
        .route("/api/stores/city/{city}", get(handler::get_by_city))
        .route("/api/stores/states/count", get(handler::states_count))
        .route("/api/stores/max-customers", get(handler::max_customers))
        .route("/api/stores/highest-sale", get(handler::highest_sale))
        .route(
            "/api/stores/{id}",
            get(handler::get)
                .put(handler::update)
                .patch(handler::patch)
                .delete(handler::delete),
        )
}
