//! Shared types for the BikeStore platform
//!
//! Wire models and auth DTOs used by store-server and any client.
//! All record ids cross the wire as `"table:key"` strings.

pub mod client;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};
