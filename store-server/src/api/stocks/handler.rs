//! Stock handlers

use axum::extract::{Path, State};
use axum::Json;

use crate::core::ServerState;
use crate::db::models::{StockCreate, StockUpdate};
use crate::db::repository::stock::StockRepository;
use crate::utils::{AppError, AppResponse, AppResult, ok};
use shared::models as api;

pub async fn list(
    State(state): State<ServerState>,
) -> AppResult<Json<AppResponse<Vec<api::Stock>>>> {
    let repo = StockRepository::new(state.get_db());
    let stocks = repo.find_all().await?;
    Ok(ok(stocks.into_iter().map(Into::into).collect()))
}

pub async fn get(
    State(state): State<ServerState>,
    Path((store_id, product_id)): Path<(String, String)>,
) -> AppResult<Json<AppResponse<api::Stock>>> {
    let repo = StockRepository::new(state.get_db());
    let stock = repo.find_by_key(&store_id, &product_id).await?.ok_or_else(|| {
        AppError::not_found(format!("Stock not found: {} / {}", store_id, product_id))
    })?;
    Ok(ok(stock.into()))
}

/// Create a stock row; a duplicate (store, product) pair is a 409
pub async fn create(
    State(state): State<ServerState>,
    Json(data): Json<StockCreate>,
) -> AppResult<Json<AppResponse<api::Stock>>> {
    let repo = StockRepository::new(state.get_db());
    let stock = repo.create(data).await?;
    Ok(ok(stock.into()))
}

pub async fn update_quantity(
    State(state): State<ServerState>,
    Json(data): Json<StockUpdate>,
) -> AppResult<Json<AppResponse<api::Stock>>> {
    let repo = StockRepository::new(state.get_db());
    let stock = repo.update_quantity(data).await?;
    Ok(ok(stock.into()))
}

/// Product with the lowest total quantity across all stores
pub async fn minimum(
    State(state): State<ServerState>,
) -> AppResult<Json<AppResponse<api::Product>>> {
    let repo = StockRepository::new(state.get_db());
    let product = repo
        .minimum_stock_product()
        .await?
        .ok_or_else(|| AppError::not_found("No stock recorded"))?;
    Ok(ok(product.into()))
}
