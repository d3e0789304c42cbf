//! Product handlers

use axum::extract::{Path, State};
use axum::Json;

use crate::core::ServerState;
use crate::db::models::{ProductCreate, ProductPatch, ProductUpdate};
use crate::db::repository::product::ProductRepository;
use crate::utils::{AppError, AppResponse, AppResult, ok};
use shared::models as api;

pub async fn list(
    State(state): State<ServerState>,
) -> AppResult<Json<AppResponse<Vec<api::Product>>>> {
    let repo = ProductRepository::new(state.get_db());
    let products = repo.find_all().await?;
    Ok(ok(products.into_iter().map(Into::into).collect()))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<api::Product>>> {
    let repo = ProductRepository::new(state.get_db());
    let product = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Product not found: {}", id)))?;
    Ok(ok(product.into()))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(data): Json<ProductCreate>,
) -> AppResult<Json<AppResponse<api::Product>>> {
    let repo = ProductRepository::new(state.get_db());
    let product = repo.create(data).await?;
    Ok(ok(product.into()))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(data): Json<ProductUpdate>,
) -> AppResult<Json<AppResponse<api::Product>>> {
    let repo = ProductRepository::new(state.get_db());
    let product = repo.update(&id, data).await?;
    Ok(ok(product.into()))
}

/// Partial update; absent fields keep their stored value
pub async fn patch(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(data): Json<ProductPatch>,
) -> AppResult<Json<AppResponse<api::Product>>> {
    let repo = ProductRepository::new(state.get_db());
    let product = repo.patch(&id, data).await?;
    Ok(ok(product.into()))
}

/// First product of the named brand; 404 when the brand has none
pub async fn get_by_brand_name(
    State(state): State<ServerState>,
    Path(name): Path<String>,
) -> AppResult<Json<AppResponse<api::Product>>> {
    let repo = ProductRepository::new(state.get_db());
    let product = repo
        .find_by_brand_name(&name)
        .await?
        .ok_or_else(|| AppError::not_found(format!("No product for brand: {}", name)))?;
    Ok(ok(product.into()))
}

pub async fn get_by_category_name(
    State(state): State<ServerState>,
    Path(name): Path<String>,
) -> AppResult<Json<AppResponse<Vec<api::Product>>>> {
    let repo = ProductRepository::new(state.get_db());
    let products = repo.find_by_category_name(&name).await?;
    Ok(ok(products.into_iter().map(Into::into).collect()))
}

pub async fn get_by_model_year(
    State(state): State<ServerState>,
    Path(year): Path<i32>,
) -> AppResult<Json<AppResponse<Vec<api::Product>>>> {
    let repo = ProductRepository::new(state.get_db());
    let products = repo.find_by_model_year(year).await?;
    Ok(ok(products.into_iter().map(Into::into).collect()))
}

/// Every product the customer has ever ordered
pub async fn get_by_customer(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<Vec<api::Product>>>> {
    let repo = ProductRepository::new(state.get_db());
    let products = repo.find_by_customer(&id).await?;
    Ok(ok(products.into_iter().map(Into::into).collect()))
}

/// Catalog rows with brand and category names resolved
pub async fn catalog(
    State(state): State<ServerState>,
) -> AppResult<Json<AppResponse<Vec<api::ProductCatalog>>>> {
    let repo = ProductRepository::new(state.get_db());
    let rows = repo.catalog().await?;
    Ok(ok(rows.into_iter().map(Into::into).collect()))
}

/// Product bought by the most order lines; 404 when nothing was sold
pub async fn max_customers(
    State(state): State<ServerState>,
) -> AppResult<Json<AppResponse<api::Product>>> {
    let repo = ProductRepository::new(state.get_db());
    let product = repo
        .max_customers_product()
        .await?
        .ok_or_else(|| AppError::not_found("No order items recorded"))?;
    Ok(ok(product.into()))
}

/// Quantity sold through each store
pub async fn sold_per_store(
    State(state): State<ServerState>,
) -> AppResult<Json<AppResponse<Vec<api::StoreSales>>>> {
    let repo = ProductRepository::new(state.get_db());
    let rows = repo.sold_per_store().await?;
    Ok(ok(rows.into_iter().map(Into::into).collect()))
}
