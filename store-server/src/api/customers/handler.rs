//! Customer handlers

use axum::extract::{Path, State};
use axum::Json;
use chrono::NaiveDate;

use crate::core::ServerState;
use crate::db::models::{ApproveStatusUpdate, CustomerCreate, CustomerUpdate};
use crate::db::repository::customer::CustomerRepository;
use crate::utils::{AppError, AppResponse, AppResult, ok};
use shared::models as api;

pub async fn list(
    State(state): State<ServerState>,
) -> AppResult<Json<AppResponse<Vec<api::Customer>>>> {
    let repo = CustomerRepository::new(state.get_db());
    let customers = repo.find_all().await?;
    Ok(ok(customers.into_iter().map(Into::into).collect()))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(data): Json<CustomerCreate>,
) -> AppResult<Json<AppResponse<api::Customer>>> {
    let repo = CustomerRepository::new(state.get_db());
    let customer = repo.create(data).await?;
    Ok(ok(customer.into()))
}

pub async fn get_by_zip(
    State(state): State<ServerState>,
    Path(zip): Path<String>,
) -> AppResult<Json<AppResponse<Vec<api::Customer>>>> {
    let repo = CustomerRepository::new(state.get_db());
    let customers = repo.find_by_zip(&zip).await?;
    Ok(ok(customers.into_iter().map(Into::into).collect()))
}

pub async fn get_by_city(
    State(state): State<ServerState>,
    Path(city): Path<String>,
) -> AppResult<Json<AppResponse<Vec<api::Customer>>>> {
    let repo = CustomerRepository::new(state.get_db());
    let customers = repo.find_by_city(&city).await?;
    Ok(ok(customers.into_iter().map(Into::into).collect()))
}

/// Customers who placed at least one order on the given date
pub async fn get_by_order_date(
    State(state): State<ServerState>,
    Path(date): Path<NaiveDate>,
) -> AppResult<Json<AppResponse<Vec<api::Customer>>>> {
    let repo = CustomerRepository::new(state.get_db());
    let customers = repo.find_by_order_date(date).await?;
    Ok(ok(customers.into_iter().map(Into::into).collect()))
}

/// Customer with the most orders; 404 when there are no orders
pub async fn highest_order(
    State(state): State<ServerState>,
) -> AppResult<Json<AppResponse<api::Customer>>> {
    let repo = CustomerRepository::new(state.get_db());
    let customer = repo
        .highest_order_customer()
        .await?
        .ok_or_else(|| AppError::not_found("No orders recorded"))?;
    Ok(ok(customer.into()))
}

/// Full profile replacement; rejected with 403 until the account is approved
pub async fn update_full_details(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(data): Json<CustomerUpdate>,
) -> AppResult<Json<AppResponse<api::Customer>>> {
    let repo = CustomerRepository::new(state.get_db());
    let customer = repo.update_full_details(&id, data).await?;
    Ok(ok(customer.into()))
}

pub async fn update_approve_status(
    State(state): State<ServerState>,
    Json(data): Json<ApproveStatusUpdate>,
) -> AppResult<Json<AppResponse<api::Customer>>> {
    let repo = CustomerRepository::new(state.get_db());
    let customer = repo.set_approve_status(&data.id, data.approve_status).await?;
    Ok(ok(customer.into()))
}
