//! Staff Model

use serde::{Deserialize, Serialize};

/// Staff entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Staff {
    pub id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub active: bool,
    /// Store reference (String ID, required)
    pub store: String,
    /// Manager reference (another staff member, absent for top management)
    pub manager: Option<String>,
}

/// Create staff payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffCreate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub active: Option<bool>,
    pub store: String,
    pub manager: Option<String>,
}

/// Full update payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffUpdate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub active: bool,
    pub store: String,
    pub manager: Option<String>,
}

/// Partial update payload; absent fields keep their stored value
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StaffPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub active: Option<bool>,
    pub store: Option<String>,
    pub manager: Option<String>,
}

/// One sale handled by a staff member
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffSale {
    pub order_id: String,
    pub customer_name: String,
}
