//! Stock Repository

use super::{BaseRepository, RepoError, RepoResult, min_by_count, record_id};
use crate::db::models::serde_helpers;
use crate::db::models::{Product, Stock, StockCreate, StockUpdate};
use serde::Deserialize;
use surrealdb::RecordId;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

#[derive(Clone)]
pub struct StockRepository {
    base: BaseRepository,
}

impl StockRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_all(&self) -> RepoResult<Vec<Stock>> {
        let stocks: Vec<Stock> = self.base.db().query("SELECT * FROM stock").await?.take(0)?;
        Ok(stocks)
    }

    /// Look up a row by its natural key (store, product)
    pub async fn find_by_key(
        &self,
        store_id: &str,
        product_id: &str,
    ) -> RepoResult<Option<Stock>> {
        let store = record_id("store", store_id)?;
        let product = record_id("product", product_id)?;
        self.find_by_store_and_product(store, product).await
    }

    async fn find_by_store_and_product(
        &self,
        store: RecordId,
        product: RecordId,
    ) -> RepoResult<Option<Stock>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM stock WHERE store = $store AND product = $product LIMIT 1")
            .bind(("store", store))
            .bind(("product", product))
            .await?;
        let stocks: Vec<Stock> = result.take(0)?;
        Ok(stocks.into_iter().next())
    }

    /// Create a row; the (store, product) pair must be unused
    pub async fn create(&self, data: StockCreate) -> RepoResult<Stock> {
        if self
            .find_by_store_and_product(data.store.clone(), data.product.clone())
            .await?
            .is_some()
        {
            return Err(RepoError::Duplicate(format!(
                "Stock ({}, {}) already exists",
                data.store, data.product
            )));
        }

        let stock = Stock {
            id: None,
            store: data.store,
            product: data.product,
            quantity: data.quantity,
        };

        let created: Option<Stock> = self.base.db().create("stock").content(stock).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create stock".to_string()))
    }

    /// Set the quantity for an existing (store, product) row
    pub async fn update_quantity(&self, data: StockUpdate) -> RepoResult<Stock> {
        let existing = self
            .find_by_store_and_product(data.store.clone(), data.product.clone())
            .await?
            .ok_or_else(|| {
                RepoError::NotFound(format!("Stock ({}, {}) not found", data.store, data.product))
            })?;
        let rid = existing
            .id
            .ok_or_else(|| RepoError::Database("Stock missing id".to_string()))?;

        self.base
            .db()
            .query("UPDATE $thing SET quantity = $quantity")
            .bind(("thing", rid))
            .bind(("quantity", data.quantity))
            .await?;

        self.find_by_store_and_product(data.store.clone(), data.product.clone())
            .await?
            .ok_or_else(|| {
                RepoError::NotFound(format!("Stock ({}, {}) not found", data.store, data.product))
            })
    }

    /// The product with the lowest total stock across all stores;
    /// None when no stock rows exist
    pub async fn minimum_stock_product(&self) -> RepoResult<Option<Product>> {
        #[derive(Deserialize)]
        struct Row {
            #[serde(deserialize_with = "serde_helpers::record_id::deserialize")]
            product: RecordId,
            quantity: i64,
        }

        let rows: Vec<Row> = self
            .base
            .db()
            .query("SELECT product, math::sum(quantity) AS quantity FROM stock GROUP BY product")
            .await?
            .take(0)?;

        let loser = min_by_count(rows.into_iter().map(|r| (r.product, r.quantity)).collect());
        match loser {
            Some(id) => {
                let product: Option<Product> = self.base.db().select(id).await?;
                Ok(product)
            }
            None => Ok(None),
        }
    }
}
