//! Store repository behavior against an in-memory database

mod common;

use rust_decimal::Decimal;

use store_server::db::models::StorePatch;
use store_server::db::repository::{RepoError, StoreRepository};

use common::*;

#[tokio::test]
async fn stores_per_state_groups_and_sorts() {
    let db = test_db().await;
    seed_store(&db, "s1", "Main", "Austin", "TX").await;
    seed_store(&db, "s2", "North", "Dallas", "TX").await;
    seed_store(&db, "s3", "Bay", "Oakland", "CA").await;

    let repo = StoreRepository::new(db.clone());
    let counts = repo.stores_per_state().await.unwrap();
    assert_eq!(counts.len(), 2);
    // Sorted by state
    assert_eq!(counts[0].state, "CA");
    assert_eq!(counts[0].stores, 1);
    assert_eq!(counts[1].state, "TX");
    assert_eq!(counts[1].stores, 2);
}

#[tokio::test]
async fn max_customers_store_counts_distinct_customers() {
    let db = test_db().await;
    seed_store(&db, "s1", "Main", "Austin", "TX").await;
    seed_store(&db, "s2", "North", "Dallas", "TX").await;
    seed_staff(&db, "e1", "Eve", "s1", None).await;
    seed_customer(&db, "c1", "Alice", "Anders", "Austin", "78701", true).await;
    seed_customer(&db, "c2", "Bob", "Brown", "Austin", "73301", true).await;

    // s1: three orders but a single customer; s2: two distinct customers
    seed_order(&db, "o1", "c1", "s1", "e1", 1, date(2016, 1, 1)).await;
    seed_order(&db, "o2", "c1", "s1", "e1", 1, date(2016, 1, 2)).await;
    seed_order(&db, "o3", "c1", "s1", "e1", 1, date(2016, 1, 3)).await;
    seed_order(&db, "o4", "c1", "s2", "e1", 1, date(2016, 1, 4)).await;
    seed_order(&db, "o5", "c2", "s2", "e1", 1, date(2016, 1, 5)).await;

    let repo = StoreRepository::new(db.clone());
    let winner = repo.max_customers_store().await.unwrap();
    assert_eq!(winner.name, "North");
}

#[tokio::test]
async fn max_customers_store_empty_is_not_found() {
    let db = test_db().await;
    seed_store(&db, "s1", "Main", "Austin", "TX").await;

    let repo = StoreRepository::new(db.clone());
    let err = repo.max_customers_store().await.unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)));
}

#[tokio::test]
async fn highest_sale_store_counts_order_lines() {
    let db = test_db().await;
    seed_store(&db, "s1", "Main", "Austin", "TX").await;
    seed_store(&db, "s2", "North", "Dallas", "TX").await;
    seed_staff(&db, "e1", "Eve", "s1", None).await;
    seed_customer(&db, "c1", "Alice", "Anders", "Austin", "78701", true).await;
    seed_brand(&db, "b1", "Trek").await;
    seed_category(&db, "g1", "Road").await;
    seed_product(&db, "p1", "Bike A", "b1", "g1", 2016, Decimal::new(1999, 2)).await;

    seed_order(&db, "o1", "c1", "s1", "e1", 1, date(2016, 1, 1)).await;
    seed_order(&db, "o2", "c1", "s2", "e1", 1, date(2016, 1, 2)).await;

    // o2 carries more lines than o1
    seed_order_item(&db, "o1", 1, "p1", 1, Decimal::new(1999, 2), Decimal::ZERO).await;
    seed_order_item(&db, "o2", 1, "p1", 1, Decimal::new(1999, 2), Decimal::ZERO).await;
    seed_order_item(&db, "o2", 2, "p1", 1, Decimal::new(1999, 2), Decimal::ZERO).await;

    let repo = StoreRepository::new(db.clone());
    let name = repo.highest_sale_store().await.unwrap();
    assert_eq!(name.as_deref(), Some("North"));
}

#[tokio::test]
async fn highest_sale_store_empty_is_none() {
    let db = test_db().await;
    let repo = StoreRepository::new(db.clone());
    assert!(repo.highest_sale_store().await.unwrap().is_none());
}

#[tokio::test]
async fn patch_and_delete() {
    let db = test_db().await;
    seed_store(&db, "s1", "Main", "Austin", "TX").await;

    let repo = StoreRepository::new(db.clone());
    let patched = repo
        .patch(
            "s1",
            StorePatch {
                phone: Some("512-555-0100".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(patched.name, "Main");
    assert_eq!(patched.phone.as_deref(), Some("512-555-0100"));

    assert!(repo.delete("s1").await.unwrap());
    assert!(!repo.delete("s1").await.unwrap());
    assert!(repo.find_by_id("s1").await.unwrap().is_none());

    let err = repo.patch("s1", StorePatch::default()).await.unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)));
}

#[tokio::test]
async fn find_by_city() {
    let db = test_db().await;
    seed_store(&db, "s1", "Main", "Austin", "TX").await;
    seed_store(&db, "s2", "North", "Dallas", "TX").await;

    let repo = StoreRepository::new(db.clone());
    let stores = repo.find_by_city("Austin").await.unwrap();
    assert_eq!(stores.len(), 1);
    assert_eq!(stores[0].name, "Main");
}
