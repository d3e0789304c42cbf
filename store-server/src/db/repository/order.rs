//! Order Repository

use super::{BaseRepository, RepoError, RepoResult, record_id};
use crate::db::models::{Order, OrderCreate, OrderUpdate};
use chrono::NaiveDate;
use serde::Deserialize;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "order";

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_all(&self) -> RepoResult<Vec<Order>> {
        let orders: Vec<Order> = self
            .base
            .db()
            .query("SELECT * FROM `order`")
            .await?
            .take(0)?;
        Ok(orders)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Order>> {
        let rid = record_id(TABLE, id)?;
        let order: Option<Order> = self.base.db().select(rid).await?;
        Ok(order)
    }

    pub async fn create(&self, data: OrderCreate) -> RepoResult<Order> {
        let order = Order {
            id: None,
            customer: data.customer,
            store: data.store,
            staff: data.staff,
            order_status: data.order_status,
            order_date: data.order_date,
            required_date: data.required_date,
            shipped_date: data.shipped_date,
        };

        let created: Option<Order> = self.base.db().create(TABLE).content(order).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create order".to_string()))
    }

    /// Full update; a missing id is NotFound
    pub async fn update(&self, id: &str, data: OrderUpdate) -> RepoResult<Order> {
        if self.find_by_id(id).await?.is_none() {
            return Err(RepoError::NotFound(format!("Order {} not found", id)));
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
            .ok_or_else(|| RepoError::NotFound(format!("Order {} not found", id)))
    }

    pub async fn find_by_customer(&self, customer_id: &str) -> RepoResult<Vec<Order>> {
        let customer = record_id("customer", customer_id)?;
        let orders: Vec<Order> = self
            .base
            .db()
            .query("SELECT * FROM `order` WHERE customer = $customer")
            .bind(("customer", customer))
            .await?
            .take(0)?;
        Ok(orders)
    }

    /// Orders whose customer has the given first name, case-insensitive
    pub async fn find_by_customer_name(&self, first_name: &str) -> RepoResult<Vec<Order>> {
        let name = first_name.to_string();
        let orders: Vec<Order> = self
            .base
            .db()
            .query(
                "SELECT * FROM `order` \
                 WHERE string::lowercase(customer.first_name) = string::lowercase($name)",
            )
            .bind(("name", name))
            .await?
            .take(0)?;
        Ok(orders)
    }

    pub async fn find_by_date(&self, date: NaiveDate) -> RepoResult<Vec<Order>> {
        let orders: Vec<Order> = self
            .base
            .db()
            .query("SELECT * FROM `order` WHERE order_date = $date")
            .bind(("date", date))
            .await?
            .take(0)?;
        Ok(orders)
    }

    pub async fn find_by_status(&self, status: i32) -> RepoResult<Vec<Order>> {
        let orders: Vec<Order> = self
            .base
            .db()
            .query("SELECT * FROM `order` WHERE order_status = $status")
            .bind(("status", status))
            .await?
            .take(0)?;
        Ok(orders)
    }

    /// The order date with the most orders; ties break on the earlier date.
    /// None when there are no orders.
    pub async fn date_with_max_orders(&self) -> RepoResult<Option<NaiveDate>> {
        #[derive(Deserialize)]
        struct Row {
            order_date: NaiveDate,
            orders: i64,
        }

        let rows: Vec<Row> = self
            .base
            .db()
            .query("SELECT order_date, count() AS orders FROM `order` GROUP BY order_date")
            .await?
            .take(0)?;

        let mut rows = rows;
        rows.sort_by(|a, b| {
            b.orders
                .cmp(&a.orders)
                .then_with(|| a.order_date.cmp(&b.order_date))
        });
        Ok(rows.into_iter().next().map(|r| r.order_date))
    }

    /// Number of orders placed on a date
    pub async fn count_by_date(&self, date: NaiveDate) -> RepoResult<i64> {
        let mut result = self
            .base
            .db()
            .query("SELECT count() FROM `order` WHERE order_date = $date GROUP ALL")
            .bind(("date", date))
            .await?;
        let count: Option<i64> = result.take((0, "count"))?;
        Ok(count.unwrap_or(0))
    }
}
