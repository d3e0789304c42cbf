//! Stock Model

use super::product::ProductId;
use super::serde_helpers;
use super::store::StoreId;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Stock ID type
pub type StockId = RecordId;

/// Stock on hand, keyed by (store, product)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stock {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "serde_helpers::option_record_id::deserialize"
    )]
    pub id: Option<StockId>,
    #[serde(deserialize_with = "serde_helpers::record_id::deserialize")]
    pub store: StoreId,
    #[serde(deserialize_with = "serde_helpers::record_id::deserialize")]
    pub product: ProductId,
    pub quantity: i32,
}

/// Create stock payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockCreate {
    #[serde(deserialize_with = "serde_helpers::record_id::deserialize")]
    pub store: StoreId,
    #[serde(deserialize_with = "serde_helpers::record_id::deserialize")]
    pub product: ProductId,
    pub quantity: i32,
}

/// Quantity update for an existing (store, product) row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockUpdate {
    #[serde(deserialize_with = "serde_helpers::record_id::deserialize")]
    pub store: StoreId,
    #[serde(deserialize_with = "serde_helpers::record_id::deserialize")]
    pub product: ProductId,
    pub quantity: i32,
}
