//! Category Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Category ID type
pub type CategoryId = RecordId;

/// Category model matching SurrealDB schema
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "serde_helpers::option_record_id::deserialize"
    )]
    pub id: Option<CategoryId>,
    pub name: String,
}

/// Create category payload; an explicit id that already exists is a conflict
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCreate {
    pub id: Option<String>,
    pub name: String,
}

/// Update category payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryUpdate {
    pub name: String,
}
