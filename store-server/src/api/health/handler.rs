use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::core::ServerState;
use crate::utils::{AppResponse, AppResult, ok};

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
    pub database: &'static str,
}

/// Liveness probe with a database round trip
pub async fn health(State(state): State<ServerState>) -> AppResult<Json<AppResponse<HealthStatus>>> {
    let database = match state.db.query("RETURN 1").await {
        Ok(_) => "up",
        Err(e) => {
            tracing::warn!("Health check database probe failed: {}", e);
            "down"
        }
    };

    Ok(ok(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        database,
    }))
}
