//! Category handlers

use axum::extract::{Path, State};
use axum::Json;

use crate::core::ServerState;
use crate::db::models::{CategoryCreate, CategoryUpdate};
use crate::db::repository::category::CategoryRepository;
use crate::utils::{AppError, AppResponse, AppResult, ok};
use shared::models as api;

pub async fn list(
    State(state): State<ServerState>,
) -> AppResult<Json<AppResponse<Vec<api::Category>>>> {
    let repo = CategoryRepository::new(state.get_db());
    let categories = repo.find_all().await?;
    Ok(ok(categories.into_iter().map(Into::into).collect()))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<api::Category>>> {
    let repo = CategoryRepository::new(state.get_db());
    let category = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Category not found: {}", id)))?;
    Ok(ok(category.into()))
}

pub async fn get_by_name(
    State(state): State<ServerState>,
    Path(name): Path<String>,
) -> AppResult<Json<AppResponse<api::Category>>> {
    let repo = CategoryRepository::new(state.get_db());
    let category = repo
        .find_by_name(&name)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Category not found: {}", name)))?;
    Ok(ok(category.into()))
}

/// Create a category; a caller-chosen id that already exists is a 409
pub async fn create(
    State(state): State<ServerState>,
    Json(data): Json<CategoryCreate>,
) -> AppResult<Json<AppResponse<api::Category>>> {
    let repo = CategoryRepository::new(state.get_db());
    let category = repo.create(data).await?;
    Ok(ok(category.into()))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(data): Json<CategoryUpdate>,
) -> AppResult<Json<AppResponse<api::Category>>> {
    let repo = CategoryRepository::new(state.get_db());
    let category = repo.update(&id, data).await?;
    Ok(ok(category.into()))
}
