//! Brand, category, and product query behavior

mod common;

use rust_decimal::Decimal;
use surrealdb::RecordId;

use store_server::db::models::{BrandCreate, BrandUpdate, CategoryCreate, ProductPatch};
use store_server::db::repository::{
    BrandRepository, CategoryRepository, ProductRepository, RepoError,
};

use common::*;

#[tokio::test]
async fn brand_create_with_chosen_id_rejects_duplicates() {
    let db = test_db().await;
    let repo = BrandRepository::new(db.clone());

    let created = repo
        .create(BrandCreate {
            id: Some("trek".to_string()),
            name: "Trek".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(created.name, "Trek");

    let err = repo
        .create(BrandCreate {
            id: Some("trek".to_string()),
            name: "Other".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::Duplicate(_)));

    // The stored row is untouched
    let stored = repo.find_by_id("trek").await.unwrap().unwrap();
    assert_eq!(stored.name, "Trek");

    // Without a chosen id the store assigns one
    let auto = repo
        .create(BrandCreate {
            id: None,
            name: "Surly".to_string(),
        })
        .await
        .unwrap();
    assert!(auto.id.is_some());
}

#[tokio::test]
async fn brand_update_missing_is_not_found() {
    let db = test_db().await;
    let repo = BrandRepository::new(db.clone());
    let err = repo
        .update(
            "missing",
            BrandUpdate {
                name: "New".to_string(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)));
}

#[tokio::test]
async fn category_lookup_by_name() {
    let db = test_db().await;
    let repo = CategoryRepository::new(db.clone());

    repo.create(CategoryCreate {
        id: Some("road".to_string()),
        name: "Road Bikes".to_string(),
    })
    .await
    .unwrap();

    let found = repo.find_by_name("Road Bikes").await.unwrap().unwrap();
    assert_eq!(found.id, Some(RecordId::from(("category", "road"))));
    assert!(repo.find_by_name("Gravel").await.unwrap().is_none());

    let err = repo
        .create(CategoryCreate {
            id: Some("road".to_string()),
            name: "Road Bikes".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::Duplicate(_)));
}

#[tokio::test]
async fn catalog_resolves_brand_and_category_names() {
    let db = test_db().await;
    seed_brand(&db, "b1", "Trek").await;
    seed_category(&db, "g1", "Road").await;
    seed_product(&db, "p1", "Trek Domane", "b1", "g1", 2016, Decimal::new(1999, 2)).await;
    seed_product(&db, "p2", "Trek Emonda", "b1", "g1", 2017, Decimal::new(2999, 2)).await;

    let repo = ProductRepository::new(db.clone());
    let catalog = repo.catalog().await.unwrap();
    assert_eq!(catalog.len(), 2);
    // Ordered by product name
    assert_eq!(catalog[0].name, "Trek Domane");
    assert_eq!(catalog[0].brand_name, "Trek");
    assert_eq!(catalog[0].category_name, "Road");
}

#[tokio::test]
async fn product_lookup_by_linked_names_and_year() {
    let db = test_db().await;
    seed_brand(&db, "b1", "Trek").await;
    seed_brand(&db, "b2", "Surly").await;
    seed_category(&db, "g1", "Road").await;
    seed_category(&db, "g2", "Touring").await;
    seed_product(&db, "p1", "Trek Domane", "b1", "g1", 2016, Decimal::new(1999, 2)).await;
    seed_product(&db, "p2", "Surly Trucker", "b2", "g2", 2016, Decimal::new(1499, 2)).await;

    let repo = ProductRepository::new(db.clone());

    let by_brand = repo.find_by_brand_name("Surly").await.unwrap().unwrap();
    assert_eq!(by_brand.name, "Surly Trucker");
    assert!(repo.find_by_brand_name("Ghost").await.unwrap().is_none());

    let by_category = repo.find_by_category_name("Road").await.unwrap();
    assert_eq!(by_category.len(), 1);

    assert_eq!(repo.find_by_model_year(2016).await.unwrap().len(), 2);
    assert!(repo.find_by_model_year(1990).await.unwrap().is_empty());
}

#[tokio::test]
async fn products_bought_by_customer() {
    let db = test_db().await;
    seed_store(&db, "s1", "Main", "Austin", "TX").await;
    seed_staff(&db, "e1", "Eve", "s1", None).await;
    seed_customer(&db, "c1", "Alice", "Anders", "Austin", "78701", true).await;
    seed_customer(&db, "c2", "Bob", "Brown", "Austin", "73301", true).await;
    seed_brand(&db, "b1", "Trek").await;
    seed_category(&db, "g1", "Road").await;
    seed_product(&db, "p1", "Bike A", "b1", "g1", 2016, Decimal::new(1999, 2)).await;
    seed_product(&db, "p2", "Bike B", "b1", "g1", 2016, Decimal::new(2999, 2)).await;

    seed_order(&db, "o1", "c1", "s1", "e1", 1, date(2016, 1, 1)).await;
    seed_order(&db, "o2", "c1", "s1", "e1", 1, date(2016, 1, 2)).await;
    seed_order(&db, "o3", "c2", "s1", "e1", 1, date(2016, 1, 3)).await;

    // Alice buys product A twice (two orders) and nothing else
    seed_order_item(&db, "o1", 1, "p1", 1, Decimal::new(1999, 2), Decimal::ZERO).await;
    seed_order_item(&db, "o2", 1, "p1", 2, Decimal::new(1999, 2), Decimal::ZERO).await;
    seed_order_item(&db, "o3", 1, "p2", 1, Decimal::new(2999, 2), Decimal::ZERO).await;

    let repo = ProductRepository::new(db.clone());
    let products = repo.find_by_customer("c1").await.unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].name, "Bike A");

    seed_customer(&db, "c3", "Carol", "Clark", "Dallas", "75201", true).await;
    assert!(repo.find_by_customer("c3").await.unwrap().is_empty());
}

#[tokio::test]
async fn max_customers_product_counts_order_lines() {
    let db = test_db().await;
    seed_store(&db, "s1", "Main", "Austin", "TX").await;
    seed_staff(&db, "e1", "Eve", "s1", None).await;
    seed_customer(&db, "c1", "Alice", "Anders", "Austin", "78701", true).await;
    seed_brand(&db, "b1", "Trek").await;
    seed_category(&db, "g1", "Road").await;
    seed_product(&db, "p1", "Bike A", "b1", "g1", 2016, Decimal::new(1999, 2)).await;
    seed_product(&db, "p2", "Bike B", "b1", "g1", 2016, Decimal::new(2999, 2)).await;
    seed_order(&db, "o1", "c1", "s1", "e1", 1, date(2016, 1, 1)).await;
    seed_order(&db, "o2", "c1", "s1", "e1", 1, date(2016, 1, 2)).await;

    seed_order_item(&db, "o1", 1, "p2", 1, Decimal::new(2999, 2), Decimal::ZERO).await;
    seed_order_item(&db, "o1", 2, "p1", 1, Decimal::new(1999, 2), Decimal::ZERO).await;
    seed_order_item(&db, "o2", 1, "p2", 1, Decimal::new(2999, 2), Decimal::ZERO).await;

    let repo = ProductRepository::new(db.clone());
    let winner = repo.max_customers_product().await.unwrap().unwrap();
    assert_eq!(winner.name, "Bike B");
}

#[tokio::test]
async fn max_customers_product_empty_is_none() {
    let db = test_db().await;
    let repo = ProductRepository::new(db.clone());
    assert!(repo.max_customers_product().await.unwrap().is_none());
}

#[tokio::test]
async fn sold_per_store_sums_quantities() {
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

    seed_order_item(&db, "o1", 1, "p1", 3, Decimal::new(1999, 2), Decimal::ZERO).await;
    seed_order_item(&db, "o1", 2, "p1", 2, Decimal::new(1999, 2), Decimal::ZERO).await;
    seed_order_item(&db, "o2", 1, "p1", 7, Decimal::new(1999, 2), Decimal::ZERO).await;

    let repo = ProductRepository::new(db.clone());
    let totals = repo.sold_per_store().await.unwrap();
    assert_eq!(totals.len(), 2);
    // Sorted by store id: s1 before s2
    assert_eq!(totals[0].store_name, "Main");
    assert_eq!(totals[0].quantity, 5);
    assert_eq!(totals[1].store_name, "North");
    assert_eq!(totals[1].quantity, 7);
}

#[tokio::test]
async fn product_patch_keeps_absent_fields() {
    let db = test_db().await;
    seed_brand(&db, "b1", "Trek").await;
    seed_category(&db, "g1", "Road").await;
    seed_product(&db, "p1", "Bike A", "b1", "g1", 2016, Decimal::new(1999, 2)).await;

    let repo = ProductRepository::new(db.clone());
    let patched = repo
        .patch(
            "p1",
            ProductPatch {
                list_price: Some(Decimal::new(1499, 2)),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(patched.name, "Bike A");
    assert_eq!(patched.model_year, 2016);
    assert_eq!(patched.list_price, Decimal::new(1499, 2));
    assert_eq!(patched.brand, RecordId::from(("brand", "b1")));
}
