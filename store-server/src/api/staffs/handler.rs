//! Staff handlers

use axum::extract::{Path, State};
use axum::Json;

use crate::core::ServerState;
use crate::db::models::{StaffCreate, StaffPatch, StaffUpdate};
use crate::db::repository::staff::StaffRepository;
use crate::utils::{AppResponse, AppResult, ok};
use shared::models as api;

pub async fn list(
    State(state): State<ServerState>,
) -> AppResult<Json<AppResponse<Vec<api::Staff>>>> {
    let repo = StaffRepository::new(state.get_db());
    let staffs = repo.find_all().await?;
    Ok(ok(staffs.into_iter().map(Into::into).collect()))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(data): Json<StaffCreate>,
) -> AppResult<Json<AppResponse<api::Staff>>> {
    let repo = StaffRepository::new(state.get_db());
    let staff = repo.create(data).await?;
    Ok(ok(staff.into()))
}

pub async fn get_by_store_name(
    State(state): State<ServerState>,
    Path(name): Path<String>,
) -> AppResult<Json<AppResponse<Vec<api::Staff>>>> {
    let repo = StaffRepository::new(state.get_db());
    let staffs = repo.find_by_store_name(&name).await?;
    Ok(ok(staffs.into_iter().map(Into::into).collect()))
}

/// The staff member this person reports to; 404 when they have none
pub async fn get_manager(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<api::Staff>>> {
    let repo = StaffRepository::new(state.get_db());
    let manager = repo.manager_of(&id).await?;
    Ok(ok(manager.into()))
}

/// Orders handled by this staff member, with the customer name resolved
pub async fn get_sales(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<Vec<api::StaffSale>>>> {
    let repo = StaffRepository::new(state.get_db());
    let sales = repo.sales(&id).await?;
    Ok(ok(sales.into_iter().map(Into::into).collect()))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(data): Json<StaffUpdate>,
) -> AppResult<Json<AppResponse<api::Staff>>> {
    let repo = StaffRepository::new(state.get_db());
    let staff = repo.update(&id, data).await?;
    Ok(ok(staff.into()))
}

/// Partial update; absent fields keep their stored value
pub async fn patch(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(data): Json<StaffPatch>,
) -> AppResult<Json<AppResponse<api::Staff>>> {
    let repo = StaffRepository::new(state.get_db());
    let staff = repo.patch(&id, data).await?;
    Ok(ok(staff.into()))
}
