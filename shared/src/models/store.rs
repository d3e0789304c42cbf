//! Store Model

use serde::{Deserialize, Serialize};

/// Store entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Store {
    pub id: Option<String>,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
}

/// Create store payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreCreate {
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
}

/// Partial update payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorePatch {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
}

/// Store count per state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateStoreCount {
    pub state: String,
    pub stores: i64,
}

/// Total quantity sold through one store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSales {
    pub store_name: String,
    pub quantity: i64,
}
