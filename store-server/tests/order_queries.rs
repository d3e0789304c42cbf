//! Order repository behavior against an in-memory database

mod common;

use surrealdb::RecordId;

use store_server::db::models::OrderUpdate;
use store_server::db::repository::{OrderRepository, RepoError};

use common::*;

async fn seed_world(db: &surrealdb::Surreal<surrealdb::engine::local::Db>) {
    seed_store(db, "s1", "Main", "Austin", "TX").await;
    seed_staff(db, "e1", "Eve", "s1", None).await;
    seed_customer(db, "c1", "Alice", "Anders", "Austin", "78701", true).await;
    seed_customer(db, "c2", "Bob", "Brown", "Austin", "73301", true).await;
}

#[tokio::test]
async fn date_with_max_orders_picks_busiest_day() {
    let db = test_db().await;
    seed_world(&db).await;

    let d1 = date(2016, 1, 1);
    let d2 = date(2016, 1, 2);
    seed_order(&db, "o1", "c1", "s1", "e1", 1, d1).await;
    seed_order(&db, "o2", "c2", "s1", "e1", 1, d1).await;
    seed_order(&db, "o3", "c1", "s1", "e1", 1, d2).await;

    let repo = OrderRepository::new(db.clone());
    assert_eq!(repo.date_with_max_orders().await.unwrap(), Some(d1));
}

#[tokio::test]
async fn date_with_max_orders_tie_takes_earliest() {
    let db = test_db().await;
    seed_world(&db).await;

    let d1 = date(2016, 3, 1);
    let d2 = date(2016, 1, 15);
    seed_order(&db, "o1", "c1", "s1", "e1", 1, d1).await;
    seed_order(&db, "o2", "c2", "s1", "e1", 1, d2).await;

    let repo = OrderRepository::new(db.clone());
    assert_eq!(repo.date_with_max_orders().await.unwrap(), Some(d2));
}

#[tokio::test]
async fn date_with_max_orders_empty_is_none() {
    let db = test_db().await;
    let repo = OrderRepository::new(db.clone());
    assert!(repo.date_with_max_orders().await.unwrap().is_none());
}

#[tokio::test]
async fn count_by_date() {
    let db = test_db().await;
    seed_world(&db).await;

    let d1 = date(2016, 1, 1);
    seed_order(&db, "o1", "c1", "s1", "e1", 1, d1).await;
    seed_order(&db, "o2", "c2", "s1", "e1", 1, d1).await;

    let repo = OrderRepository::new(db.clone());
    assert_eq!(repo.count_by_date(d1).await.unwrap(), 2);
    assert_eq!(repo.count_by_date(date(2020, 5, 5)).await.unwrap(), 0);
}

#[tokio::test]
async fn find_by_customer_name_is_case_insensitive() {
    let db = test_db().await;
    seed_world(&db).await;
    seed_order(&db, "o1", "c1", "s1", "e1", 1, date(2016, 1, 1)).await;
    seed_order(&db, "o2", "c2", "s1", "e1", 1, date(2016, 1, 2)).await;

    let repo = OrderRepository::new(db.clone());
    let orders = repo.find_by_customer_name("ALICE").await.unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].customer, RecordId::from(("customer", "c1")));
}

#[tokio::test]
async fn find_by_status_and_date() {
    let db = test_db().await;
    seed_world(&db).await;
    let d1 = date(2016, 1, 1);
    seed_order(&db, "o1", "c1", "s1", "e1", 1, d1).await;
    seed_order(&db, "o2", "c2", "s1", "e1", 4, d1).await;
    seed_order(&db, "o3", "c1", "s1", "e1", 4, date(2016, 2, 2)).await;

    let repo = OrderRepository::new(db.clone());
    assert_eq!(repo.find_by_status(4).await.unwrap().len(), 2);
    assert_eq!(repo.find_by_status(3).await.unwrap().len(), 0);
    assert_eq!(repo.find_by_date(d1).await.unwrap().len(), 2);
}

#[tokio::test]
async fn update_replaces_every_field() {
    let db = test_db().await;
    seed_world(&db).await;
    seed_order(&db, "o1", "c1", "s1", "e1", 1, date(2016, 1, 1)).await;

    let repo = OrderRepository::new(db.clone());
    let updated = repo
        .update(
            "o1",
            OrderUpdate {
                customer: RecordId::from(("customer", "c2")),
                store: RecordId::from(("store", "s1")),
                staff: RecordId::from(("staff", "e1")),
                order_status: 4,
                order_date: date(2016, 1, 1),
                required_date: date(2016, 1, 10),
                shipped_date: Some(date(2016, 1, 5)),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.customer, RecordId::from(("customer", "c2")));
    assert_eq!(updated.order_status, 4);
    assert_eq!(updated.shipped_date, Some(date(2016, 1, 5)));
}

#[tokio::test]
async fn update_missing_order_is_not_found() {
    let db = test_db().await;
    seed_world(&db).await;

    let repo = OrderRepository::new(db.clone());
    let err = repo
        .update(
            "missing",
            OrderUpdate {
                customer: RecordId::from(("customer", "c1")),
                store: RecordId::from(("store", "s1")),
                staff: RecordId::from(("staff", "e1")),
                order_status: 1,
                order_date: date(2016, 1, 1),
                required_date: date(2016, 1, 8),
                shipped_date: None,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)));
}
