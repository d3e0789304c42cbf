//! Order handlers

use axum::extract::{Path, State};
use axum::Json;
use chrono::NaiveDate;
use serde::Serialize;

use crate::core::ServerState;
use crate::db::models::{OrderCreate, OrderUpdate};
use crate::db::repository::order::OrderRepository;
use crate::utils::{AppError, AppResponse, AppResult, ok};
use shared::models as api;

pub async fn list(
    State(state): State<ServerState>,
) -> AppResult<Json<AppResponse<Vec<api::Order>>>> {
    let repo = OrderRepository::new(state.get_db());
    let orders = repo.find_all().await?;
    Ok(ok(orders.into_iter().map(Into::into).collect()))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<api::Order>>> {
    let repo = OrderRepository::new(state.get_db());
    let order = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Order not found: {}", id)))?;
    Ok(ok(order.into()))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(data): Json<OrderCreate>,
) -> AppResult<Json<AppResponse<api::Order>>> {
    let repo = OrderRepository::new(state.get_db());
    let order = repo.create(data).await?;
    Ok(ok(order.into()))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(data): Json<OrderUpdate>,
) -> AppResult<Json<AppResponse<api::Order>>> {
    let repo = OrderRepository::new(state.get_db());
    let order = repo.update(&id, data).await?;
    Ok(ok(order.into()))
}

pub async fn get_by_customer(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<Vec<api::Order>>>> {
    let repo = OrderRepository::new(state.get_db());
    let orders = repo.find_by_customer(&id).await?;
    Ok(ok(orders.into_iter().map(Into::into).collect()))
}

/// Orders whose customer first name matches, case-insensitively
pub async fn get_by_customer_name(
    State(state): State<ServerState>,
    Path(name): Path<String>,
) -> AppResult<Json<AppResponse<Vec<api::Order>>>> {
    let repo = OrderRepository::new(state.get_db());
    let orders = repo.find_by_customer_name(&name).await?;
    Ok(ok(orders.into_iter().map(Into::into).collect()))
}

pub async fn get_by_date(
    State(state): State<ServerState>,
    Path(date): Path<NaiveDate>,
) -> AppResult<Json<AppResponse<Vec<api::Order>>>> {
    let repo = OrderRepository::new(state.get_db());
    let orders = repo.find_by_date(date).await?;
    Ok(ok(orders.into_iter().map(Into::into).collect()))
}

pub async fn get_by_status(
    State(state): State<ServerState>,
    Path(status): Path<i32>,
) -> AppResult<Json<AppResponse<Vec<api::Order>>>> {
    let repo = OrderRepository::new(state.get_db());
    let orders = repo.find_by_status(status).await?;
    Ok(ok(orders.into_iter().map(Into::into).collect()))
}

#[derive(Debug, Serialize)]
pub struct BusiestDate {
    pub order_date: NaiveDate,
}

/// Date with the most orders; ties resolve to the earliest date
pub async fn max_date(
    State(state): State<ServerState>,
) -> AppResult<Json<AppResponse<BusiestDate>>> {
    let repo = OrderRepository::new(state.get_db());
    let order_date = repo
        .date_with_max_orders()
        .await?
        .ok_or_else(|| AppError::not_found("No orders recorded"))?;
    Ok(ok(BusiestDate { order_date }))
}

#[derive(Debug, Serialize)]
pub struct OrderCount {
    pub order_date: NaiveDate,
    pub orders: i64,
}

pub async fn count_by_date(
    State(state): State<ServerState>,
    Path(date): Path<NaiveDate>,
) -> AppResult<Json<AppResponse<OrderCount>>> {
    let repo = OrderRepository::new(state.get_db());
    let orders = repo.count_by_date(date).await?;
    Ok(ok(OrderCount {
        order_date: date,
        orders,
    }))
}
