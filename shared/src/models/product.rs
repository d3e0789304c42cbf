//! Product Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: Option<String>,
    pub name: String,
    /// Brand reference (String ID, required)
    pub brand: String,
    /// Category reference (String ID, required)
    pub category: String,
    pub model_year: i32,
    pub list_price: Decimal,
}

/// Create product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub brand: String,
    pub category: String,
    pub model_year: i32,
    pub list_price: Decimal,
}

/// Full update payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name: String,
    pub brand: String,
    pub category: String,
    pub model_year: i32,
    pub list_price: Decimal,
}

/// Partial update payload; absent fields keep their stored value
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub model_year: Option<i32>,
    pub list_price: Option<Decimal>,
}

/// Catalog row: product with brand and category names resolved
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCatalog {
    pub name: String,
    pub brand_name: String,
    pub category_name: String,
}
