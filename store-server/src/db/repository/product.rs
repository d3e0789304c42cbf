//! Product Repository

use super::{BaseRepository, RepoError, RepoResult, max_by_count, record_id};
use crate::db::models::serde_helpers;
use crate::db::models::{Product, ProductCreate, ProductPatch, ProductUpdate};
use serde::Deserialize;
use surrealdb::RecordId;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "product";

/// Catalog row: product with brand and category names resolved
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub brand_name: String,
    pub category_name: String,
}

/// Quantity sold through one store
#[derive(Debug, Clone)]
pub struct StoreQuantity {
    pub store: RecordId,
    pub store_name: String,
    pub quantity: i64,
}

#[derive(Clone)]
pub struct ProductRepository {
    base: BaseRepository,
}

impl ProductRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_all(&self) -> RepoResult<Vec<Product>> {
        let products: Vec<Product> = self
            .base
            .db()
            .query("SELECT * FROM product")
            .await?
            .take(0)?;
        Ok(products)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Product>> {
        let rid = record_id(TABLE, id)?;
        let product: Option<Product> = self.base.db().select(rid).await?;
        Ok(product)
    }

    pub async fn create(&self, data: ProductCreate) -> RepoResult<Product> {
        let product = Product {
            id: None,
            name: data.name,
            brand: data.brand,
            category: data.category,
            model_year: data.model_year,
            list_price: data.list_price,
        };

        let created: Option<Product> = self.base.db().create(TABLE).content(product).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create product".to_string()))
    }

    /// Full update: every field is replaced
    pub async fn update(&self, id: &str, data: ProductUpdate) -> RepoResult<Product> {
        if self.find_by_id(id).await?.is_none() {
            return Err(RepoError::NotFound(format!("Product {} not found", id)));
        }

        let rid = record_id(TABLE, id)?;
        self.base
            .db()
            .query("UPDATE $thing MERGE $data")
            .bind(("thing", rid))
            .bind(("data", data))
            .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Product {} not found", id)))
    }

    /// Partial update: only supplied fields overwrite stored values
    pub async fn patch(&self, id: &str, data: ProductPatch) -> RepoResult<Product> {
        if self.find_by_id(id).await?.is_none() {
            return Err(RepoError::NotFound(format!("Product {} not found", id)));
        }

        let rid = record_id(TABLE, id)?;
        self.base
            .db()
            .query("UPDATE $thing MERGE $data")
            .bind(("thing", rid))
            .bind(("data", data))
            .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Product {} not found", id)))
    }

    /// First product of the brand with the given name
    pub async fn find_by_brand_name(&self, name: &str) -> RepoResult<Option<Product>> {
        let name = name.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM product WHERE brand.name = $name LIMIT 1")
            .bind(("name", name))
            .await?;
        let products: Vec<Product> = result.take(0)?;
        Ok(products.into_iter().next())
    }

    pub async fn find_by_category_name(&self, name: &str) -> RepoResult<Vec<Product>> {
        let name = name.to_string();
        let products: Vec<Product> = self
            .base
            .db()
            .query("SELECT * FROM product WHERE category.name = $name")
            .bind(("name", name))
            .await?
            .take(0)?;
        Ok(products)
    }

    pub async fn find_by_model_year(&self, year: i32) -> RepoResult<Vec<Product>> {
        let products: Vec<Product> = self
            .base
            .db()
            .query("SELECT * FROM product WHERE model_year = $year")
            .bind(("year", year))
            .await?
            .take(0)?;
        Ok(products)
    }

    /// Products the customer has purchased (through order lines)
    pub async fn find_by_customer(&self, customer_id: &str) -> RepoResult<Vec<Product>> {
        #[derive(Deserialize)]
        struct Row {
            #[serde(deserialize_with = "serde_helpers::record_id::deserialize")]
            product: RecordId,
        }

        let customer = record_id("customer", customer_id)?;
        let rows: Vec<Row> = self
            .base
            .db()
            .query("SELECT product FROM order_item WHERE `order`.customer = $customer")
            .bind(("customer", customer))
            .await?
            .take(0)?;

        let mut ids: Vec<RecordId> = rows.into_iter().map(|r| r.product).collect();
        ids.sort_by_key(|id| id.to_string());
        ids.dedup();
        if ids.is_empty() {
            return Ok(vec![]);
        }

        let mut products: Vec<Product> = self
            .base
            .db()
            .query("SELECT * FROM product WHERE id IN $ids")
            .bind(("ids", ids))
            .await?
            .take(0)?;
        products.sort_by_key(|p| p.id.as_ref().map(|id| id.to_string()));
        Ok(products)
    }

    /// Product names with brand and category names resolved
    pub async fn catalog(&self) -> RepoResult<Vec<CatalogEntry>> {
        let entries: Vec<CatalogEntry> = self
            .base
            .db()
            .query(
                "SELECT name, brand.name AS brand_name, category.name AS category_name \
                 FROM product ORDER BY name",
            )
            .await?
            .take(0)?;
        Ok(entries)
    }

    /// The product appearing on the most order lines; None when no lines exist
    pub async fn max_customers_product(&self) -> RepoResult<Option<Product>> {
        #[derive(Deserialize)]
        struct Row {
            #[serde(deserialize_with = "serde_helpers::record_id::deserialize")]
            product: RecordId,
            buyers: i64,
        }

        let rows: Vec<Row> = self
            .base
            .db()
            .query("SELECT product, count() AS buyers FROM order_item GROUP BY product")
            .await?
            .take(0)?;

        let winner = max_by_count(rows.into_iter().map(|r| (r.product, r.buyers)).collect());
        match winner {
            Some(id) => {
                let product: Option<Product> = self.base.db().select(id).await?;
                Ok(product)
            }
            None => Ok(None),
        }
    }

    /// Total quantity sold per store, with store names resolved
    ///
    /// Empty when there are no order lines; stores whose row has vanished
    /// are skipped.
    pub async fn sold_per_store(&self) -> RepoResult<Vec<StoreQuantity>> {
        #[derive(Deserialize)]
        struct Row {
            #[serde(deserialize_with = "serde_helpers::record_id::deserialize")]
            store: RecordId,
            quantity: i64,
        }

        #[derive(Deserialize)]
        struct NameRow {
            name: String,
        }

        let rows: Vec<Row> = self
            .base
            .db()
            .query(
                "SELECT `order`.store AS store, math::sum(quantity) AS quantity \
                 FROM order_item GROUP BY store",
            )
            .await?
            .take(0)?;

        let mut totals: Vec<StoreQuantity> = Vec::with_capacity(rows.len());
        for row in rows {
            let mut result = self
                .base
                .db()
                .query("SELECT name FROM $store")
                .bind(("store", row.store.clone()))
                .await?;
            let name: Option<NameRow> = result.take(0)?;
            if let Some(name) = name {
                totals.push(StoreQuantity {
                    store: row.store,
                    store_name: name.name,
                    quantity: row.quantity,
                });
            }
        }

        totals.sort_by_key(|t| t.store.to_string());
        Ok(totals)
    }
}
