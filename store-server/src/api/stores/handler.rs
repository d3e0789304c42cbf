//! Store handlers

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::core::ServerState;
use crate::db::repository::store::StoreRepository;
use crate::db::models::{StoreCreate, StorePatch};
use crate::utils::{AppError, AppResponse, AppResult, ok};
use shared::models as api;

pub async fn list(
    State(state): State<ServerState>,
) -> AppResult<Json<AppResponse<Vec<api::Store>>>> {
    let repo = StoreRepository::new(state.get_db());
    let stores = repo.find_all().await?;
    Ok(ok(stores.into_iter().map(Into::into).collect()))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<api::Store>>> {
    let repo = StoreRepository::new(state.get_db());
    let store = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Store not found: {}", id)))?;
    Ok(ok(store.into()))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(data): Json<StoreCreate>,
) -> AppResult<Json<AppResponse<api::Store>>> {
    let repo = StoreRepository::new(state.get_db());
    let store = repo.create(data).await?;
    Ok(ok(store.into()))
}

pub async fn get_by_city(
    State(state): State<ServerState>,
    Path(city): Path<String>,
) -> AppResult<Json<AppResponse<Vec<api::Store>>>> {
    let repo = StoreRepository::new(state.get_db());
    let stores = repo.find_by_city(&city).await?;
    Ok(ok(stores.into_iter().map(Into::into).collect()))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(data): Json<StoreCreate>,
) -> AppResult<Json<AppResponse<api::Store>>> {
    let repo = StoreRepository::new(state.get_db());
    let store = repo.update(&id, data).await?;
    Ok(ok(store.into()))
}

/// Partial update; absent fields keep their stored value
pub async fn patch(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(data): Json<StorePatch>,
) -> AppResult<Json<AppResponse<api::Store>>> {
    let repo = StoreRepository::new(state.get_db());
    let store = repo.patch(&id, data).await?;
    Ok(ok(store.into()))
}

#[derive(Debug, Serialize)]
pub struct DeleteResult {
    pub deleted: bool,
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<DeleteResult>>> {
    let repo = StoreRepository::new(state.get_db());
    let deleted = repo.delete(&id).await?;
    if !deleted {
        return Err(AppError::not_found(format!("Store not found: {}", id)));
    }
    Ok(ok(DeleteResult { deleted }))
}

/// Store counts grouped by state
pub async fn states_count(
    State(state): State<ServerState>,
) -> AppResult<Json<AppResponse<Vec<api::StateStoreCount>>>> {
    let repo = StoreRepository::new(state.get_db());
    let counts = repo.stores_per_state().await?;
    Ok(ok(counts.into_iter().map(Into::into).collect()))
}

/// Store serving the most distinct customers; 404 when there are no orders
pub async fn max_customers(
    State(state): State<ServerState>,
) -> AppResult<Json<AppResponse<api::Store>>> {
    let repo = StoreRepository::new(state.get_db());
    let store = repo.max_customers_store().await?;
    Ok(ok(store.into()))
}

#[derive(Debug, Serialize)]
pub struct HighestSaleStore {
    pub store_name: String,
}

/// Name of the store whose orders carry the most line items
pub async fn highest_sale(
    State(state): State<ServerState>,
) -> AppResult<Json<AppResponse<HighestSaleStore>>> {
    let repo = StoreRepository::new(state.get_db());
    let store_name = repo
        .highest_sale_store()
        .await?
        .ok_or_else(|| AppError::not_found("No order items recorded"))?;
    Ok(ok(HighestSaleStore { store_name }))
}
