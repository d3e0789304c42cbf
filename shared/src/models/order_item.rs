//! Order Item Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Order line item, keyed by (order, item_id)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: Option<String>,
    /// Order reference (String ID, required)
    pub order: String,
    /// Line number within the order
    pub item_id: i32,
    /// Product reference (String ID, required)
    pub product: String,
    pub quantity: i32,
    /// Unit price at sale time
    pub list_price: Decimal,
    /// Absolute discount on the whole line
    pub discount: Decimal,
    pub order_approved: Option<bool>,
}

/// Create order item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemCreate {
    pub order: String,
    pub item_id: i32,
    pub product: String,
    pub quantity: i32,
    pub list_price: Decimal,
    pub discount: Decimal,
}

/// Full update payload for an existing (order, item_id) line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemUpdate {
    pub product: String,
    pub quantity: i32,
    pub list_price: Decimal,
    pub discount: Decimal,
}

/// Approve flag payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderApprovedUpdate {
    pub order: String,
    pub item_id: i32,
    pub order_approved: bool,
}
