//! Repository Module
//!
//! Provides CRUD operations and reporting queries for SurrealDB tables.

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
pub use brand::BrandRepository;
pub use category::CategoryRepository;
pub use customer::CustomerRepository;
pub use order::OrderRepository;
pub use order_item::OrderItemRepository;
pub use product::ProductRepository;
pub use staff::StaffRepository;
pub use stock::StockRepository;
pub use store::StoreRepository;
pub use user::UserRepository;

use surrealdb::RecordId;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// ID Convention: "table:id" strings end-to-end
// =============================================================================
//
// surrealdb::RecordId handles all IDs:
//   - parse: let id: RecordId = "product:abc".parse()?;
//   - build: let id = RecordId::from_table_key("product", "abc");
//   - table name: id.table()
//   - bare key: id.key().to_string()
//   - CRUD: db.select(id) / db.delete(id) take RecordId directly

/// Build a RecordId for `table` from either "table:key" or a bare key
pub fn record_id(table: &str, id: &str) -> RepoResult<RecordId> {
    match id.split_once(':') {
        Some((tb, key)) if tb == table => Ok(RecordId::from_table_key(table, key)),
        Some((tb, _)) => Err(RepoError::Validation(format!(
            "Expected {} id, got '{}:...'",
            table, tb
        ))),
        None => Ok(RecordId::from_table_key(table, id)),
    }
}

/// Pick the entry with the highest count; ties break on ascending id
///
/// Grouped counts come back from SurrealDB in engine order, so the winner
/// is chosen here to keep results deterministic.
pub(crate) fn max_by_count(mut rows: Vec<(RecordId, i64)>) -> Option<RecordId> {
    rows.sort_by(|a, b| {
        b.1.cmp(&a.1)
            .then_with(|| a.0.to_string().cmp(&b.0.to_string()))
    });
    rows.into_iter().next().map(|(id, _)| id)
}

/// Pick the entry with the lowest count; ties break on ascending id
pub(crate) fn min_by_count(mut rows: Vec<(RecordId, i64)>) -> Option<RecordId> {
    rows.sort_by(|a, b| {
        a.1.cmp(&b.1)
            .then_with(|| a.0.to_string().cmp(&b.0.to_string()))
    });
    rows.into_iter().next().map(|(id, _)| id)
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_id_accepts_both_forms() {
        let full = record_id("product", "product:abc").unwrap();
        let bare = record_id("product", "abc").unwrap();
        assert_eq!(full, bare);
        assert_eq!(full.to_string(), "product:abc");
    }

    #[test]
    fn test_record_id_rejects_foreign_table() {
        assert!(record_id("product", "brand:abc").is_err());
    }

    #[test]
    fn test_max_by_count_breaks_ties_on_id() {
        let a = RecordId::from_table_key("customer", "aaa");
        let b = RecordId::from_table_key("customer", "bbb");
        let rows = vec![(b.clone(), 3), (a.clone(), 3)];
        assert_eq!(max_by_count(rows), Some(a));
    }

    #[test]
    fn test_min_by_count_empty_is_none() {
        assert_eq!(min_by_count(vec![]), None);
    }

    #[test]
    fn test_min_by_count_picks_lowest() {
        let a = RecordId::from_table_key("product", "a");
        let b = RecordId::from_table_key("product", "b");
        let rows = vec![(a, 20), (b.clone(), 15)];
        assert_eq!(min_by_count(rows), Some(b));
    }
}
