//! Staff Model

use super::serde_helpers;
use super::store::StoreId;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Staff ID type
pub type StaffId = RecordId;

/// Staff model matching SurrealDB schema
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Staff {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "serde_helpers::option_record_id::deserialize"
    )]
    pub id: Option<StaffId>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    #[serde(
        default = "default_true",
        deserialize_with = "serde_helpers::bool_true"
    )]
    pub active: bool,
    #[serde(deserialize_with = "serde_helpers::record_id::deserialize")]
    pub store: StoreId,
    #[serde(
        default,
        deserialize_with = "serde_helpers::option_record_id::deserialize"
    )]
    pub manager: Option<StaffId>,
}

fn default_true() -> bool {
    true
}

/// Create staff payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffCreate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub active: Option<bool>,
    #[serde(deserialize_with = "serde_helpers::record_id::deserialize")]
    pub store: StoreId,
    #[serde(
        default,
        deserialize_with = "serde_helpers::option_record_id::deserialize"
    )]
    pub manager: Option<StaffId>,
}

/// Full update payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffUpdate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub active: bool,
    #[serde(deserialize_with = "serde_helpers::record_id::deserialize")]
    pub store: StoreId,
    #[serde(
        default,
        deserialize_with = "serde_helpers::option_record_id::deserialize"
    )]
    pub manager: Option<StaffId>,
}

/// Partial update payload; absent fields keep their stored value
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StaffPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "serde_helpers::option_record_id::deserialize"
    )]
    pub store: Option<StoreId>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "serde_helpers::option_record_id::deserialize"
    )]
    pub manager: Option<StaffId>,
}
