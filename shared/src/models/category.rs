//! Category Model

use serde::{Deserialize, Serialize};

/// Category entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: Option<String>,
    pub name: String,
}

/// Create category payload; a caller-chosen id collides with 409
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
