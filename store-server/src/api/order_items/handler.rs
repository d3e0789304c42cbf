//! Order item handlers

use axum::extract::{Path, State};
use axum::Json;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::ServerState;
use crate::db::models::{OrderApprovedUpdate, OrderItemCreate, OrderItemUpdate};
use crate::db::repository::order_item::OrderItemRepository;
use crate::utils::{AppError, AppResponse, AppResult, ok};
use shared::models as api;

pub async fn list(
    State(state): State<ServerState>,
) -> AppResult<Json<AppResponse<Vec<api::OrderItem>>>> {
    let repo = OrderItemRepository::new(state.get_db());
    let items = repo.find_all().await?;
    Ok(ok(items.into_iter().map(Into::into).collect()))
}

pub async fn get(
    State(state): State<ServerState>,
    Path((order_id, item_id)): Path<(String, i32)>,
) -> AppResult<Json<AppResponse<api::OrderItem>>> {
    let repo = OrderItemRepository::new(state.get_db());
    let item = repo.find_by_key(&order_id, item_id).await?.ok_or_else(|| {
        AppError::not_found(format!("Order item not found: {} #{}", order_id, item_id))
    })?;
    Ok(ok(item.into()))
}

/// Create a line; a duplicate (order, item_id) pair is a 409
pub async fn create(
    State(state): State<ServerState>,
    Json(data): Json<OrderItemCreate>,
) -> AppResult<Json<AppResponse<api::OrderItem>>> {
    let repo = OrderItemRepository::new(state.get_db());
    let item = repo.create(data).await?;
    Ok(ok(item.into()))
}

pub async fn update(
    State(state): State<ServerState>,
    Path((order_id, item_id)): Path<(String, i32)>,
    Json(data): Json<OrderItemUpdate>,
) -> AppResult<Json<AppResponse<api::OrderItem>>> {
    let repo = OrderItemRepository::new(state.get_db());
    let item = repo.update(&order_id, item_id, data).await?;
    Ok(ok(item.into()))
}

#[derive(Debug, Serialize)]
pub struct BillAmount {
    pub amount: Decimal,
}

/// Line total after discount; zero when the line does not exist
pub async fn bill(
    State(state): State<ServerState>,
    Path((order_id, item_id)): Path<(String, i32)>,
) -> AppResult<Json<AppResponse<BillAmount>>> {
    let repo = OrderItemRepository::new(state.get_db());
    let amount = repo.bill_amount(&order_id, item_id).await?;
    Ok(ok(BillAmount { amount }))
}

/// Line total before discount; zero when the line does not exist
pub async fn bill_without_discount(
    State(state): State<ServerState>,
    Path((order_id, item_id)): Path<(String, i32)>,
) -> AppResult<Json<AppResponse<BillAmount>>> {
    let repo = OrderItemRepository::new(state.get_db());
    let amount = repo.bill_without_discount(&order_id, item_id).await?;
    Ok(ok(BillAmount { amount }))
}

pub async fn set_approved(
    State(state): State<ServerState>,
    Json(data): Json<OrderApprovedUpdate>,
) -> AppResult<Json<AppResponse<api::OrderItem>>> {
    let repo = OrderItemRepository::new(state.get_db());
    let item = repo
        .set_order_approved(&data.order, data.item_id, data.order_approved)
        .await?;
    Ok(ok(item.into()))
}
