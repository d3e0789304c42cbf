//! Staff repository behavior against an in-memory database

mod common;

use surrealdb::RecordId;

use store_server::db::models::StaffPatch;
use store_server::db::repository::{RepoError, StaffRepository};

use common::*;

#[tokio::test]
async fn find_by_store_name_follows_the_link() {
    let db = test_db().await;
    seed_store(&db, "s1", "Main", "Austin", "TX").await;
    seed_store(&db, "s2", "North", "Dallas", "TX").await;
    seed_staff(&db, "e1", "Eve", "s1", None).await;
    seed_staff(&db, "e2", "Frank", "s1", Some("e1")).await;
    seed_staff(&db, "e3", "Grace", "s2", None).await;

    let repo = StaffRepository::new(db.clone());
    let staffs = repo.find_by_store_name("Main").await.unwrap();
    assert_eq!(staffs.len(), 2);
    assert!(repo.find_by_store_name("Nowhere").await.unwrap().is_empty());
}

#[tokio::test]
async fn manager_resolution() {
    let db = test_db().await;
    seed_store(&db, "s1", "Main", "Austin", "TX").await;
    seed_staff(&db, "e1", "Eve", "s1", None).await;
    seed_staff(&db, "e2", "Frank", "s1", Some("e1")).await;

    let repo = StaffRepository::new(db.clone());

    let manager = repo.manager_of("e2").await.unwrap();
    assert_eq!(manager.first_name, "Eve");

    // Top of the chain has no manager
    let err = repo.manager_of("e1").await.unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)));

    let err = repo.manager_of("missing").await.unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)));
}

#[tokio::test]
async fn sales_resolve_customer_names() {
    let db = test_db().await;
    seed_store(&db, "s1", "Main", "Austin", "TX").await;
    seed_staff(&db, "e1", "Eve", "s1", None).await;
    seed_staff(&db, "e2", "Frank", "s1", None).await;
    seed_customer(&db, "c1", "Alice", "Anders", "Austin", "78701", true).await;

    seed_order(&db, "o1", "c1", "s1", "e1", 1, date(2016, 1, 1)).await;
    seed_order(&db, "o2", "c1", "s1", "e1", 1, date(2016, 1, 2)).await;
    seed_order(&db, "o3", "c1", "s1", "e2", 1, date(2016, 1, 3)).await;

    let repo = StaffRepository::new(db.clone());
    let sales = repo.sales("e1").await.unwrap();
    assert_eq!(sales.len(), 2);
    assert_eq!(sales[0].customer_name, "Alice Anders");
    // Sorted by order id
    assert_eq!(sales[0].order, RecordId::from(("order", "o1")));
    assert_eq!(sales[1].order, RecordId::from(("order", "o2")));

    assert!(repo.sales("e2").await.unwrap().len() == 1);
}

#[tokio::test]
async fn patch_preserves_absent_fields() {
    let db = test_db().await;
    seed_store(&db, "s1", "Main", "Austin", "TX").await;
    seed_staff(&db, "e1", "Eve", "s1", None).await;

    let repo = StaffRepository::new(db.clone());
    let patched = repo
        .patch(
            "e1",
            StaffPatch {
                first_name: Some("Patched".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(patched.first_name, "Patched");
    assert_eq!(patched.last_name, "Doe");
    assert!(patched.active);
    assert_eq!(patched.store, RecordId::from(("store", "s1")));

    let err = repo
        .patch("missing", StaffPatch::default())
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)));
}
