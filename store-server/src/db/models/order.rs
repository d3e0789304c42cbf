//! Order Model

use super::customer::CustomerId;
use super::serde_helpers;
use super::staff::StaffId;
use super::store::StoreId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Order ID type
pub type OrderId = RecordId;

/// Order model matching SurrealDB schema
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "serde_helpers::option_record_id::deserialize"
    )]
    pub id: Option<OrderId>,
    #[serde(deserialize_with = "serde_helpers::record_id::deserialize")]
    pub customer: CustomerId,
    #[serde(deserialize_with = "serde_helpers::record_id::deserialize")]
    pub store: StoreId,
    #[serde(deserialize_with = "serde_helpers::record_id::deserialize")]
    pub staff: StaffId,
    /// 1=pending, 2=processing, 3=rejected, 4=completed
    pub order_status: i32,
    pub order_date: NaiveDate,
    pub required_date: NaiveDate,
    pub shipped_date: Option<NaiveDate>,
}

/// Create order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    #[serde(deserialize_with = "serde_helpers::record_id::deserialize")]
    pub customer: CustomerId,
    #[serde(deserialize_with = "serde_helpers::record_id::deserialize")]
    pub store: StoreId,
    #[serde(deserialize_with = "serde_helpers::record_id::deserialize")]
    pub staff: StaffId,
    pub order_status: i32,
    pub order_date: NaiveDate,
    pub required_date: NaiveDate,
    pub shipped_date: Option<NaiveDate>,
}

/// Full update payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderUpdate {
    #[serde(deserialize_with = "serde_helpers::record_id::deserialize")]
    pub customer: CustomerId,
    #[serde(deserialize_with = "serde_helpers::record_id::deserialize")]
    pub store: StoreId,
    #[serde(deserialize_with = "serde_helpers::record_id::deserialize")]
    pub staff: StaffId,
    pub order_status: i32,
    pub order_date: NaiveDate,
    pub required_date: NaiveDate,
    pub shipped_date: Option<NaiveDate>,
}
