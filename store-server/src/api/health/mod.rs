//! Health check routes - public (no auth required)

use axum::{Router, routing::get};

use crate::core::ServerState;

pub mod handler;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/health", get(handler::health))
}
