//! Brand handlers

use axum::extract::{Path, State};
use axum::Json;

use crate::core::ServerState;
use crate::db::models::{BrandCreate, BrandUpdate};
use crate::db::repository::brand::BrandRepository;
use crate::utils::{AppError, AppResponse, AppResult, ok};
use shared::models as api;

pub async fn list(
    State(state): State<ServerState>,
) -> AppResult<Json<AppResponse<Vec<api::Brand>>>> {
    let repo = BrandRepository::new(state.get_db());
    let brands = repo.find_all().await?;
    Ok(ok(brands.into_iter().map(Into::into).collect()))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<api::Brand>>> {
    let repo = BrandRepository::new(state.get_db());
    let brand = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Brand not found: {}", id)))?;
    Ok(ok(brand.into()))
}

/// Create a brand; a caller-chosen id that already exists is a 409
pub async fn create(
    State(state): State<ServerState>,
    Json(data): Json<BrandCreate>,
) -> AppResult<Json<AppResponse<api::Brand>>> {
    let repo = BrandRepository::new(state.get_db());
    let brand = repo.create(data).await?;
    Ok(ok(brand.into()))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(data): Json<BrandUpdate>,
) -> AppResult<Json<AppResponse<api::Brand>>> {
    let repo = BrandRepository::new(state.get_db());
    let brand = repo.update(&id, data).await?;
    Ok(ok(brand.into()))
}
