//! Brand Model

use serde::{Deserialize, Serialize};

/// Brand entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brand {
    pub id: Option<String>,
    pub name: String,
}

/// Create brand payload; a caller-chosen id collides with 409
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
