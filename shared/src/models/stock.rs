//! Stock Model

use serde::{Deserialize, Serialize};

/// Stock on hand, keyed by (store, product)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stock {
    pub id: Option<String>,
    /// Store reference (String ID, required)
    pub store: String,
    /// Product reference (String ID, required)
    pub product: String,
    pub quantity: i32,
}

/// Create stock payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockCreate {
    pub store: String,
    pub product: String,
    pub quantity: i32,
}

/// Quantity update for an existing (store, product) row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockUpdate {
    pub store: String,
    pub product: String,
    pub quantity: i32,
}
