//! Product Model

use super::brand::BrandId;
use super::category::CategoryId;
use super::serde_helpers;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Product ID type
pub type ProductId = RecordId;

/// Product model matching SurrealDB schema
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "serde_helpers::option_record_id::deserialize"
    )]
    pub id: Option<ProductId>,
    pub name: String,
    #[serde(deserialize_with = "serde_helpers::record_id::deserialize")]
    pub brand: BrandId,
    #[serde(deserialize_with = "serde_helpers::record_id::deserialize")]
    pub category: CategoryId,
    pub model_year: i32,
    pub list_price: Decimal,
}

/// Create product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    #[serde(deserialize_with = "serde_helpers::record_id::deserialize")]
    pub brand: BrandId,
    #[serde(deserialize_with = "serde_helpers::record_id::deserialize")]
    pub category: CategoryId,
    pub model_year: i32,
    pub list_price: Decimal,
}

/// Full update payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name: String,
    #[serde(deserialize_with = "serde_helpers::record_id::deserialize")]
    pub brand: BrandId,
    #[serde(deserialize_with = "serde_helpers::record_id::deserialize")]
    pub category: CategoryId,
    pub model_year: i32,
    pub list_price: Decimal,
}

/// Partial update payload; absent fields keep their stored value
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "serde_helpers::option_record_id::deserialize"
    )]
    pub brand: Option<BrandId>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "serde_helpers::option_record_id::deserialize"
    )]
    pub category: Option<CategoryId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_price: Option<Decimal>,
}
