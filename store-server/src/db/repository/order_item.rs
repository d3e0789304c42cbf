//! Order Item Repository

use super::{BaseRepository, RepoError, RepoResult, record_id};
use crate::db::models::{OrderItem, OrderItemCreate, OrderItemUpdate};
use rust_decimal::Decimal;
use surrealdb::RecordId;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

#[derive(Clone)]
pub struct OrderItemRepository {
    base: BaseRepository,
}

impl OrderItemRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_all(&self) -> RepoResult<Vec<OrderItem>> {
        let items: Vec<OrderItem> = self
            .base
            .db()
            .query("SELECT * FROM order_item")
            .await?
            .take(0)?;
        Ok(items)
    }

    /// Look up a line by its natural key (order, item_id)
    pub async fn find_by_key(&self, order_id: &str, item_id: i32) -> RepoResult<Option<OrderItem>> {
        let order = record_id("order", order_id)?;
        self.find_by_order_and_item(order, item_id).await
    }

    async fn find_by_order_and_item(
        &self,
        order: RecordId,
        item_id: i32,
    ) -> RepoResult<Option<OrderItem>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM order_item WHERE `order` = $order AND item_id = $item LIMIT 1")
            .bind(("order", order))
            .bind(("item", item_id))
            .await?;
        let items: Vec<OrderItem> = result.take(0)?;
        Ok(items.into_iter().next())
    }

    /// Create a line; the (order, item_id) pair must be unused
    pub async fn create(&self, data: OrderItemCreate) -> RepoResult<OrderItem> {
        if self
            .find_by_order_and_item(data.order.clone(), data.item_id)
            .await?
            .is_some()
        {
            return Err(RepoError::Duplicate(format!(
                "Order item ({}, {}) already exists",
                data.order, data.item_id
            )));
        }

        let item = OrderItem {
            id: None,
            order: data.order,
            item_id: data.item_id,
            product: data.product,
            quantity: data.quantity,
            list_price: data.list_price,
            discount: data.discount,
            order_approved: None,
        };

        let created: Option<OrderItem> = self.base.db().create("order_item").content(item).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create order item".to_string()))
    }

    /// Full update of an existing line
    pub async fn update(
        &self,
        order_id: &str,
        item_id: i32,
        data: OrderItemUpdate,
    ) -> RepoResult<OrderItem> {
        let existing = self.find_by_key(order_id, item_id).await?.ok_or_else(|| {
            RepoError::NotFound(format!("Order item ({}, {}) not found", order_id, item_id))
        })?;
        let rid = existing
            .id
            .ok_or_else(|| RepoError::Database("Order item missing id".to_string()))?;

        self.base
            .db()
            .query("UPDATE $thing MERGE $data")
            .bind(("thing", rid))
            .bind(("data", data))
            .await?;

        self.find_by_key(order_id, item_id).await?.ok_or_else(|| {
            RepoError::NotFound(format!("Order item ({}, {}) not found", order_id, item_id))
        })
    }

    /// Line total after discount; a missing line bills zero
    pub async fn bill_amount(&self, order_id: &str, item_id: i32) -> RepoResult<Decimal> {
        Ok(self
            .find_by_key(order_id, item_id)
            .await?
            .map(|item| item.bill_amount())
            .unwrap_or(Decimal::ZERO))
    }

    /// Line total before discount; a missing line bills zero
    pub async fn bill_without_discount(&self, order_id: &str, item_id: i32) -> RepoResult<Decimal> {
        Ok(self
            .find_by_key(order_id, item_id)
            .await?
            .map(|item| item.bill_without_discount())
            .unwrap_or(Decimal::ZERO))
    }

    /// Set the approve flag
    ///
    /// A storage error during the write is recovered by re-checking
    /// existence: a vanished line maps to NotFound, anything else re-raises.
    pub async fn set_order_approved(
        &self,
        order_id: &str,
        item_id: i32,
        approved: bool,
    ) -> RepoResult<OrderItem> {
        let existing = self.find_by_key(order_id, item_id).await?.ok_or_else(|| {
            RepoError::NotFound(format!("Order item ({}, {}) not found", order_id, item_id))
        })?;
        let rid = existing
            .id
            .ok_or_else(|| RepoError::Database("Order item missing id".to_string()))?;

        let result = self
            .base
            .db()
            .query("UPDATE $thing SET order_approved = $approved")
            .bind(("thing", rid))
            .bind(("approved", approved))
            .await;

        match result {
            Ok(_) => self.find_by_key(order_id, item_id).await?.ok_or_else(|| {
                RepoError::NotFound(format!("Order item ({}, {}) not found", order_id, item_id))
            }),
            Err(e) => {
                if self.find_by_key(order_id, item_id).await?.is_none() {
                    Err(RepoError::NotFound(format!(
                        "Order item ({}, {}) not found",
                        order_id, item_id
                    )))
                } else {
                    Err(e.into())
                }
            }
        }
    }
}
