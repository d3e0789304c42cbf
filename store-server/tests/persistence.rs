//! RocksDB-backed storage smoke test
//!
//! The query tests run against the in-memory engine; this one opens the
//! real on-disk engine the server uses.

use store_server::db::DbService;
use store_server::db::models::BrandCreate;
use store_server::db::repository::BrandRepository;

#[tokio::test]
async fn rocksdb_engine_applies_schema_and_stores_rows() {
    let tmp = tempfile::tempdir().unwrap();
    let db_path = tmp.path().join("bikestore.db");

    let service = DbService::new(&db_path.to_string_lossy()).await.unwrap();
    let repo = BrandRepository::new(service.db.clone());

    repo.create(BrandCreate {
        id: Some("trek".to_string()),
        name: "Trek".to_string(),
    })
    .await
    .unwrap();

    let stored = repo.find_by_id("trek").await.unwrap().unwrap();
    assert_eq!(stored.name, "Trek");

    // Duplicate detection behaves the same on this engine
    let err = repo
        .create(BrandCreate {
            id: Some("trek".to_string()),
            name: "Other".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        store_server::db::repository::RepoError::Duplicate(_)
    ));
}
