//! Store Repository

use super::{BaseRepository, RepoError, RepoResult, max_by_count, record_id};
use crate::db::models::serde_helpers;
use crate::db::models::{Store, StoreCreate, StorePatch};
use serde::Deserialize;
use std::collections::HashMap;
use std::collections::HashSet;
use surrealdb::RecordId;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "store";

/// Store count for one state
#[derive(Debug, Clone)]
pub struct StateCount {
    pub state: String,
    pub stores: i64,
}

#[derive(Clone)]
pub struct StoreRepository {
    base: BaseRepository,
}

impl StoreRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_all(&self) -> RepoResult<Vec<Store>> {
        let stores: Vec<Store> = self.base.db().query("SELECT * FROM store").await?.take(0)?;
        Ok(stores)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Store>> {
        let rid = record_id(TABLE, id)?;
        let store: Option<Store> = self.base.db().select(rid).await?;
        Ok(store)
    }

    pub async fn create(&self, data: StoreCreate) -> RepoResult<Store> {
        let store = Store {
            id: None,
            name: data.name,
            phone: data.phone,
            email: data.email,
            street: data.street,
            city: data.city,
            state: data.state,
            zip_code: data.zip_code,
        };

        let created: Option<Store> = self.base.db().create(TABLE).content(store).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create store".to_string()))
    }

    pub async fn find_by_city(&self, city: &str) -> RepoResult<Vec<Store>> {
        let city = city.to_string();
        let stores: Vec<Store> = self
            .base
            .db()
            .query("SELECT * FROM store WHERE city = $city")
            .bind(("city", city))
            .await?
            .take(0)?;
        Ok(stores)
    }

    /// Partial update: only supplied fields overwrite stored values
    pub async fn patch(&self, id: &str, data: StorePatch) -> RepoResult<Store> {
        if self.find_by_id(id).await?.is_none() {
            return Err(RepoError::NotFound(format!("Store {} not found", id)));
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
            .ok_or_else(|| RepoError::NotFound(format!("Store {} not found", id)))
    }

    /// Full update: every field is replaced
    pub async fn update(&self, id: &str, data: StoreCreate) -> RepoResult<Store> {
        if self.find_by_id(id).await?.is_none() {
            return Err(RepoError::NotFound(format!("Store {} not found", id)));
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
            .ok_or_else(|| RepoError::NotFound(format!("Store {} not found", id)))
    }

    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let rid = record_id(TABLE, id)?;
        let deleted: Option<Store> = self.base.db().delete(rid).await?;
        Ok(deleted.is_some())
    }

    /// Number of stores per state; rows without a state are skipped
    pub async fn stores_per_state(&self) -> RepoResult<Vec<StateCount>> {
        #[derive(Deserialize)]
        struct Row {
            state: String,
            stores: i64,
        }

        let rows: Vec<Row> = self
            .base
            .db()
            .query("SELECT state, count() AS stores FROM store WHERE state != NONE GROUP BY state")
            .await?
            .take(0)?;

        let mut counts: Vec<StateCount> = rows
            .into_iter()
            .map(|r| StateCount {
                state: r.state,
                stores: r.stores,
            })
            .collect();
        counts.sort_by(|a, b| a.state.cmp(&b.state));
        Ok(counts)
    }

    /// The store whose orders come from the most distinct customers
    ///
    /// Distinct counting happens here over a full scan of the order pairs;
    /// empty data is NotFound, never a panic.
    pub async fn max_customers_store(&self) -> RepoResult<Store> {
        #[derive(Deserialize)]
        struct Row {
            #[serde(deserialize_with = "serde_helpers::record_id::deserialize")]
            store: RecordId,
            #[serde(deserialize_with = "serde_helpers::record_id::deserialize")]
            customer: RecordId,
        }

        let rows: Vec<Row> = self
            .base
            .db()
            .query("SELECT store, customer FROM `order`")
            .await?
            .take(0)?;

        let mut per_store: HashMap<String, (RecordId, HashSet<String>)> = HashMap::new();
        for row in rows {
            per_store
                .entry(row.store.to_string())
                .or_insert_with(|| (row.store.clone(), HashSet::new()))
                .1
                .insert(row.customer.to_string());
        }

        let counts: Vec<(RecordId, i64)> = per_store
            .into_values()
            .map(|(id, customers)| (id, customers.len() as i64))
            .collect();

        let winner = max_by_count(counts)
            .ok_or_else(|| RepoError::NotFound("No orders recorded".to_string()))?;

        let store: Option<Store> = self.base.db().select(winner.clone()).await?;
        store.ok_or_else(|| RepoError::NotFound(format!("Store {} not found", winner)))
    }

    /// Name of the store behind the order with the most line items
    ///
    /// None when no order items exist.
    pub async fn highest_sale_store(&self) -> RepoResult<Option<String>> {
        #[derive(Deserialize)]
        struct Row {
            #[serde(deserialize_with = "serde_helpers::record_id::deserialize")]
            ord: RecordId,
            items: i64,
        }

        let rows: Vec<Row> = self
            .base
            .db()
            .query("SELECT `order` AS ord, count() AS items FROM order_item GROUP BY ord")
            .await?
            .take(0)?;

        let winner = max_by_count(rows.into_iter().map(|r| (r.ord, r.items)).collect());
        let order_id = match winner {
            Some(id) => id,
            None => return Ok(None),
        };

        #[derive(Deserialize)]
        struct NameRow {
            name: String,
        }

        let mut result = self
            .base
            .db()
            .query("SELECT store.name AS name FROM $order_id")
            .bind(("order_id", order_id.clone()))
            .await?;
        let row: Option<NameRow> = result.take(0)?;
        let name = row
            .ok_or_else(|| RepoError::NotFound(format!("Order {} not found", order_id)))?
            .name;
        Ok(Some(name))
    }
}
