//! User store behavior: registration, duplicates, password hashing

mod common;

use store_server::db::models::UserCreate;
use store_server::db::repository::{RepoError, UserRepository};

use common::*;

#[tokio::test]
async fn create_hashes_password_and_round_trips() {
    let db = test_db().await;
    let repo = UserRepository::new(db.clone());

    let user = repo
        .create(UserCreate {
            username: "clerk".to_string(),
            password: "super-secret-pw".to_string(),
            roles: vec!["staff".to_string()],
        })
        .await
        .unwrap();

    assert_ne!(user.hash_pass, "super-secret-pw");
    assert!(user.verify_password("super-secret-pw").unwrap());
    assert!(!user.verify_password("wrong").unwrap());

    let found = repo.find_by_username("clerk").await.unwrap().unwrap();
    assert_eq!(found.roles, vec!["staff".to_string()]);
    assert!(repo.find_by_username("nobody").await.unwrap().is_none());
}

#[tokio::test]
async fn duplicate_username_is_rejected() {
    let db = test_db().await;
    let repo = UserRepository::new(db.clone());

    repo.create(UserCreate {
        username: "clerk".to_string(),
        password: "super-secret-pw".to_string(),
        roles: vec![],
    })
    .await
    .unwrap();

    let err = repo
        .create(UserCreate {
            username: "clerk".to_string(),
            password: "other-password".to_string(),
            roles: vec![],
        })
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::Duplicate(_)));
}
