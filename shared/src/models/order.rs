//! Order Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: Option<String>,
    /// Customer reference (String ID, required)
    pub customer: String,
    /// Store reference (String ID, required)
    pub store: String,
    /// Staff reference (String ID, required)
    pub staff: String,
    /// 1=pending, 2=processing, 3=rejected, 4=completed
    pub order_status: i32,
    pub order_date: NaiveDate,
    pub required_date: NaiveDate,
    pub shipped_date: Option<NaiveDate>,
}

/// Create order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub customer: String,
    pub store: String,
    pub staff: String,
    pub order_status: i32,
    pub order_date: NaiveDate,
    pub required_date: NaiveDate,
    pub shipped_date: Option<NaiveDate>,
}

/// Full update payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderUpdate {
    pub customer: String,
    pub store: String,
    pub staff: String,
    pub order_status: i32,
    pub order_date: NaiveDate,
    pub required_date: NaiveDate,
    pub shipped_date: Option<NaiveDate>,
}
