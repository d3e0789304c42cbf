//! Authentication routes
//!
//! - /api/auth/login, /api/auth/register: public (no auth required)
//! - /api/auth/me: protected (requires auth)

use axum::{Router, routing::get, routing::post};

use crate::core::ServerState;

pub mod handler;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/auth/login", post(handler::login))
        .route("/api/auth/register", post(handler::register))
        .route("/api/auth/me", get(handler::me))
}
