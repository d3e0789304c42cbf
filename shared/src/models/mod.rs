//! Data models
//!
//! Shared between store-server and clients (via API).
//! Record references are `String` ids in `"table:key"` form.

pub mod brand;
pub mod category;
pub mod customer;
pub mod order;
pub mod order_item;
pub mod product;
pub mod staff;
pub mod stock;
pub mod store;

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
