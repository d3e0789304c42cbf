//! Staff Repository

use super::{BaseRepository, RepoError, RepoResult, record_id};
use crate::db::models::serde_helpers;
use crate::db::models::{Staff, StaffCreate, StaffPatch, StaffUpdate};
use serde::Deserialize;
use surrealdb::RecordId;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "staff";

/// One order handled by a staff member, with the customer resolved
#[derive(Debug, Clone)]
pub struct StaffSaleEntry {
    pub order: RecordId,
    pub customer_name: String,
}

#[derive(Clone)]
pub struct StaffRepository {
    base: BaseRepository,
}

impl StaffRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_all(&self) -> RepoResult<Vec<Staff>> {
        let staffs: Vec<Staff> = self.base.db().query("SELECT * FROM staff").await?.take(0)?;
        Ok(staffs)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Staff>> {
        let rid = record_id(TABLE, id)?;
        let staff: Option<Staff> = self.base.db().select(rid).await?;
        Ok(staff)
    }

    pub async fn create(&self, data: StaffCreate) -> RepoResult<Staff> {
        let staff = Staff {
            id: None,
            first_name: data.first_name,
            last_name: data.last_name,
            email: data.email,
            phone: data.phone,
            active: data.active.unwrap_or(true),
            store: data.store,
            manager: data.manager,
        };

        let created: Option<Staff> = self.base.db().create(TABLE).content(staff).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create staff".to_string()))
    }

    /// Staff working at the store with the given name
    pub async fn find_by_store_name(&self, name: &str) -> RepoResult<Vec<Staff>> {
        let name = name.to_string();
        let staffs: Vec<Staff> = self
            .base
            .db()
            .query("SELECT * FROM staff WHERE store.name = $name")
            .bind(("name", name))
            .await?
            .take(0)?;
        Ok(staffs)
    }

    /// Resolve the manager of a staff member
    ///
    /// A missing manager link is an error, not an empty result.
    pub async fn manager_of(&self, id: &str) -> RepoResult<Staff> {
        let staff = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Staff {} not found", id)))?;

        let manager_id = staff
            .manager
            .ok_or_else(|| RepoError::NotFound(format!("Staff {} has no manager", id)))?;

        let manager: Option<Staff> = self.base.db().select(manager_id.clone()).await?;
        manager.ok_or_else(|| RepoError::NotFound(format!("Manager {} not found", manager_id)))
    }

    /// Orders handled by a staff member, with customer full names
    pub async fn sales(&self, id: &str) -> RepoResult<Vec<StaffSaleEntry>> {
        #[derive(Deserialize)]
        struct Row {
            #[serde(deserialize_with = "serde_helpers::record_id::deserialize")]
            id: RecordId,
            customer_name: String,
        }

        let rid = record_id(TABLE, id)?;
        let rows: Vec<Row> = self
            .base
            .db()
            .query(
                "SELECT id, string::concat(customer.first_name, ' ', customer.last_name) AS customer_name \
                 FROM `order` WHERE staff = $staff",
            )
            .bind(("staff", rid))
            .await?
            .take(0)?;

        let mut entries: Vec<StaffSaleEntry> = rows
            .into_iter()
            .map(|r| StaffSaleEntry {
                order: r.id,
                customer_name: r.customer_name,
            })
            .collect();
        entries.sort_by_key(|e| e.order.to_string());
        Ok(entries)
    }

    /// Full update: every field is replaced
    pub async fn update(&self, id: &str, data: StaffUpdate) -> RepoResult<Staff> {
        if self.find_by_id(id).await?.is_none() {
            return Err(RepoError::NotFound(format!("Staff {} not found", id)));
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
            .ok_or_else(|| RepoError::NotFound(format!("Staff {} not found", id)))
    }

    /// Partial update: only supplied fields overwrite stored values
    pub async fn patch(&self, id: &str, data: StaffPatch) -> RepoResult<Staff> {
        if self.find_by_id(id).await?.is_none() {
            return Err(RepoError::NotFound(format!("Staff {} not found", id)));
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
            .ok_or_else(|| RepoError::NotFound(format!("Staff {} not found", id)))
    }
}
