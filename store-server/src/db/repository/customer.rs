//! Customer Repository

use super::{BaseRepository, RepoError, RepoResult, max_by_count, record_id};
use crate::db::models::{Customer, CustomerCreate, CustomerUpdate};
use crate::db::models::serde_helpers;
use chrono::NaiveDate;
use serde::Deserialize;
use surrealdb::RecordId;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "customer";

#[derive(Clone)]
pub struct CustomerRepository {
    base: BaseRepository,
}

impl CustomerRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_all(&self) -> RepoResult<Vec<Customer>> {
        let customers: Vec<Customer> = self.base.db().query("SELECT * FROM customer").await?.take(0)?;
        Ok(customers)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Customer>> {
        let rid = record_id(TABLE, id)?;
        let customer: Option<Customer> = self.base.db().select(rid).await?;
        Ok(customer)
    }

    pub async fn create(&self, data: CustomerCreate) -> RepoResult<Customer> {
        let customer = Customer {
            id: None,
            first_name: data.first_name,
            last_name: data.last_name,
            phone: data.phone,
            email: data.email,
            street: data.street,
            city: data.city,
            state: data.state,
            zip_code: data.zip_code,
            approve_status: data.approve_status.unwrap_or(false),
        };

        let created: Option<Customer> = self.base.db().create(TABLE).content(customer).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create customer".to_string()))
    }

    pub async fn find_by_zip(&self, zip_code: &str) -> RepoResult<Vec<Customer>> {
        let zip = zip_code.to_string();
        let customers: Vec<Customer> = self
            .base
            .db()
            .query("SELECT * FROM customer WHERE zip_code = $zip")
            .bind(("zip", zip))
            .await?
            .take(0)?;
        Ok(customers)
    }

    pub async fn find_by_city(&self, city: &str) -> RepoResult<Vec<Customer>> {
        let city = city.to_string();
        let customers: Vec<Customer> = self
            .base
            .db()
            .query("SELECT * FROM customer WHERE city = $city ORDER BY first_name, last_name")
            .bind(("city", city))
            .await?
            .take(0)?;
        Ok(customers)
    }

    /// Customers that placed at least one order on the given date
    pub async fn find_by_order_date(&self, date: NaiveDate) -> RepoResult<Vec<Customer>> {
        #[derive(Deserialize)]
        struct Row {
            #[serde(deserialize_with = "serde_helpers::record_id::deserialize")]
            customer: RecordId,
        }

        let rows: Vec<Row> = self
            .base
            .db()
            .query("SELECT customer FROM `order` WHERE order_date = $date")
            .bind(("date", date))
            .await?
            .take(0)?;

        let mut ids: Vec<RecordId> = rows.into_iter().map(|r| r.customer).collect();
        ids.sort_by_key(|id| id.to_string());
        ids.dedup();
        if ids.is_empty() {
            return Ok(vec![]);
        }

        let mut customers: Vec<Customer> = self
            .base
            .db()
            .query("SELECT * FROM customer WHERE id IN $ids")
            .bind(("ids", ids))
            .await?
            .take(0)?;
        customers.sort_by_key(|c| c.id.as_ref().map(|id| id.to_string()));
        Ok(customers)
    }

    /// The customer with the most orders; None when there are no orders
    pub async fn highest_order_customer(&self) -> RepoResult<Option<Customer>> {
        #[derive(Deserialize)]
        struct Row {
            #[serde(deserialize_with = "serde_helpers::record_id::deserialize")]
            customer: RecordId,
            orders: i64,
        }

        let rows: Vec<Row> = self
            .base
            .db()
            .query("SELECT customer, count() AS orders FROM `order` GROUP BY customer")
            .await?
            .take(0)?;

        let winner = max_by_count(rows.into_iter().map(|r| (r.customer, r.orders)).collect());
        match winner {
            Some(id) => {
                let customer: Option<Customer> = self.base.db().select(id).await?;
                Ok(customer)
            }
            None => Ok(None),
        }
    }

    /// Full self-service profile update
    ///
    /// The row must exist and must already be approved; an unapproved
    /// account gets Forbidden and the stored row is untouched.
    pub async fn update_full_details(&self, id: &str, data: CustomerUpdate) -> RepoResult<Customer> {
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Customer {} not found", id)))?;

        if !existing.approve_status {
            return Err(RepoError::Forbidden(format!(
                "Customer {} is not approved for updates",
                id
            )));
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
            .ok_or_else(|| RepoError::NotFound(format!("Customer {} not found", id)))
    }

    /// Toggle the approve flag
    ///
    /// A storage error during the write is recovered by re-checking
    /// existence: a vanished row maps to NotFound, anything else re-raises.
    pub async fn set_approve_status(&self, id: &str, approve_status: bool) -> RepoResult<Customer> {
        if self.find_by_id(id).await?.is_none() {
            return Err(RepoError::NotFound(format!("Customer {} not found", id)));
        }

        let rid = record_id(TABLE, id)?;
        let result = self
            .base
            .db()
            .query("UPDATE $thing SET approve_status = $status")
            .bind(("thing", rid))
            .bind(("status", approve_status))
            .await;

        match result {
            Ok(_) => self
                .find_by_id(id)
                .await?
                .ok_or_else(|| RepoError::NotFound(format!("Customer {} not found", id))),
            Err(e) => {
                if self.find_by_id(id).await?.is_none() {
                    Err(RepoError::NotFound(format!("Customer {} not found", id)))
                } else {
                    Err(e.into())
                }
            }
        }
    }
}
