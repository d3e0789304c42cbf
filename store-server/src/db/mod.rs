//! Database Module
//!
//! Embedded SurrealDB storage. Tables are schemaless; natural keys are
//! enforced with unique indexes defined at startup.

pub mod models;
pub mod repository;

use crate::utils::AppError;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

const NAMESPACE: &str = "bikestore";
const DATABASE: &str = "bikestore";

/// Database service — owns the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the RocksDB-backed database and apply schema
    pub async fn new(db_path: &str) -> Result<Self, AppError> {
        let db = Surreal::new::<RocksDb>(db_path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        define_schema(&db).await?;

        tracing::info!("Database connection established (SurrealDB RocksDB)");

        Ok(Self { db })
    }
}

/// Apply table and index definitions
///
/// Idempotent; also used by tests against the in-memory engine.
pub async fn define_schema(db: &Surreal<Db>) -> Result<(), AppError> {
    db.query(
        r#"
        DEFINE TABLE IF NOT EXISTS user SCHEMALESS;
        DEFINE INDEX IF NOT EXISTS user_username ON user FIELDS username UNIQUE;

        DEFINE TABLE IF NOT EXISTS stock SCHEMALESS;
        DEFINE INDEX IF NOT EXISTS stock_store_product ON stock FIELDS store, product UNIQUE;

        DEFINE TABLE IF NOT EXISTS order_item SCHEMALESS;
        DEFINE INDEX IF NOT EXISTS order_item_order_line ON order_item FIELDS `order`, item_id UNIQUE;
        "#,
    )
    .await
    .map_err(|e| AppError::database(format!("Failed to apply schema: {e}")))?;

    Ok(())
}
