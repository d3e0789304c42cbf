//! Brand Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Brand ID type
pub type BrandId = RecordId;

/// Brand model matching SurrealDB schema
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brand {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "serde_helpers::option_record_id::deserialize"
    )]
    pub id: Option<BrandId>,
    pub name: String,
}

/// Create brand payload; an explicit id that already exists is a conflict
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandCreate {
    pub id: Option<String>,
    pub name: String,
}

/// Update brand payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandUpdate {
    pub name: String,
}
