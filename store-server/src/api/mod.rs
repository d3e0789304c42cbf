//! HTTP API
//!
//! Route assembly and the request/response surface. Every resource owns a
//! small module with a `router()` plus its handlers; [`build_app`] stacks
//! the shared middleware on top.

use axum::Router;
use axum::middleware as axum_middleware;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

pub mod convert;

pub mod auth;
pub mod brands;
pub mod categories;
pub mod customers;
pub mod health;
pub mod order_items;
pub mod orders;
pub mod products;
pub mod staffs;
pub mod stocks;
pub mod stores;

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        // Auth API - login/register are public, /me is protected
        .merge(auth::router())
        // Resource APIs - authentication required
        .merge(customers::router())
        .merge(staffs::router())
        .merge(stores::router())
        .merge(brands::router())
        .merge(categories::router())
        .merge(products::router())
        .merge(orders::router())
        .merge(order_items::router())
        .merge(stocks::router())
        // Health API - public route
        .merge(health::router())
}

/// Build a fully configured application with all middleware
pub fn build_app(state: &ServerState) -> Router<ServerState> {
    build_router()
        // CORS - handle cross-origin requests
        .layer(CorsLayer::permissive())
        // Trace - request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
        // JWT authentication - executes before routes, injects CurrentUser
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            crate::auth::require_auth,
        ))
}
