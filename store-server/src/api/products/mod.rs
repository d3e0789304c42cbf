//! Product routes

use axum::{Router, routing::get};

use crate::core::ServerState;

pub mod handler;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/products", get(handler::list).post(handler::create))
        .route("/api/products/catalog", get(handler::catalog))
        .route("/api/products/brand-name/{name}", get(handler::get_by_brand_name))
        .route(
            "/api/products/category-name/{name}",
            get(handler::get_by_category_name),
        )
        .route(
            "/api/products/model-year/{year}",
            get(handler::get_by_model_year),
        )
        .route("/api/products/customer/{id}", get(handler::get_by_customer))
        .route("/api/products/max-customers", get(handler::max_customers))
        .route("/api/products/per-store", get(handler::sold_per_store))
        .route(
            "/api/products/{id}",
            get(handler::get).put(handler::update).patch(handler::patch),
        )
}
