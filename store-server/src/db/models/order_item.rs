//! Order Item Model

use super::order::OrderId;
use super::product::ProductId;
use super::serde_helpers;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Order item ID type
pub type OrderItemId = RecordId;

/// Order line item, keyed by (order, item_id)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "serde_helpers::option_record_id::deserialize"
    )]
    pub id: Option<OrderItemId>,
    #[serde(deserialize_with = "serde_helpers::record_id::deserialize")]
    pub order: OrderId,
    pub item_id: i32,
    #[serde(deserialize_with = "serde_helpers::record_id::deserialize")]
    pub product: ProductId,
    pub quantity: i32,
    /// Unit price at sale time
    pub list_price: Decimal,
    /// Absolute discount on the whole line
    pub discount: Decimal,
    pub order_approved: Option<bool>,
}

impl OrderItem {
    /// Line total after discount: list_price * quantity - discount
    pub fn bill_amount(&self) -> Decimal {
        self.list_price * Decimal::from(self.quantity) - self.discount
    }

    /// Line total before discount: list_price * quantity
    pub fn bill_without_discount(&self) -> Decimal {
        self.list_price * Decimal::from(self.quantity)
    }
}

/// Create order item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemCreate {
    #[serde(deserialize_with = "serde_helpers::record_id::deserialize")]
    pub order: OrderId,
    pub item_id: i32,
    #[serde(deserialize_with = "serde_helpers::record_id::deserialize")]
    pub product: ProductId,
    pub quantity: i32,
    pub list_price: Decimal,
    pub discount: Decimal,
}

/// Full update payload for an existing (order, item_id) line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemUpdate {
    #[serde(deserialize_with = "serde_helpers::record_id::deserialize")]
    pub product: ProductId,
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

#[cfg(test)]
mod tests {
    use super::*;
    use surrealdb::RecordId;

    fn item(quantity: i32, list_price: Decimal, discount: Decimal) -> OrderItem {
        OrderItem {
            id: None,
            order: RecordId::from_table_key("order", "o1"),
            item_id: 1,
            product: RecordId::from_table_key("product", "p1"),
            quantity,
            list_price,
            discount,
            order_approved: None,
        }
    }

    #[test]
    fn test_bill_amount_applies_discount() {
        let line = item(2, Decimal::new(1999, 2), Decimal::new(99, 2));
        // 19.99 * 2 - 0.99 = 38.99
        assert_eq!(line.bill_amount(), Decimal::new(3899, 2));
    }

    #[test]
    fn test_bill_without_discount() {
        let line = item(3, Decimal::new(500, 2), Decimal::new(100, 2));
        // 5.00 * 3 = 15.00
        assert_eq!(line.bill_without_discount(), Decimal::new(1500, 2));
    }

    #[test]
    fn test_zero_discount_bills_match() {
        let line = item(4, Decimal::new(1050, 2), Decimal::ZERO);
        assert_eq!(line.bill_amount(), line.bill_without_discount());
    }
}
