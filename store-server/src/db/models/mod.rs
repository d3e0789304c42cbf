//! Database models
//!
//! Persisted entity structs plus Create/Update payloads. Link fields are
//! `RecordId` and are stored as real record links; payloads accept the
//! string form "table:id" from API JSON (see [`serde_helpers`]).

pub mod serde_helpers;

pub mod brand;
pub mod category;
pub mod customer;
pub mod order;
pub mod order_item;
pub mod product;
pub mod staff;
pub mod stock;
pub mod store;
pub mod user;

// Re-exports
pub use brand::*;
pub use category::*;
pub use customer::*;
pub use order::*;
pub use order_item::*;
pub use product::*;
pub use staff::*;
pub use stock::*;
pub use store::*;
pub use user::*;
