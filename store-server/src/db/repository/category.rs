//! Category Repository

use super::{BaseRepository, RepoError, RepoResult, record_id};
use crate::db::models::{Category, CategoryCreate, CategoryUpdate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "category";

#[derive(Clone)]
pub struct CategoryRepository {
    base: BaseRepository,
}

impl CategoryRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_all(&self) -> RepoResult<Vec<Category>> {
        let categories: Vec<Category> = self
            .base
            .db()
            .query("SELECT * FROM category")
            .await?
            .take(0)?;
        Ok(categories)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Category>> {
        let rid = record_id(TABLE, id)?;
        let category: Option<Category> = self.base.db().select(rid).await?;
        Ok(category)
    }

    pub async fn find_by_name(&self, name: &str) -> RepoResult<Option<Category>> {
        let name = name.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM category WHERE name = $name LIMIT 1")
            .bind(("name", name))
            .await?;
        let categories: Vec<Category> = result.take(0)?;
        Ok(categories.into_iter().next())
    }

    /// Create a category; a caller-chosen id that already exists is a
    /// Duplicate and existing rows stay untouched
    pub async fn create(&self, data: CategoryCreate) -> RepoResult<Category> {
        let category = Category {
            id: None,
            name: data.name,
        };

        let created: Option<Category> = match data.id {
            Some(id) => {
                if self.find_by_id(&id).await?.is_some() {
                    return Err(RepoError::Duplicate(format!(
                        "Category {} already exists",
                        id
                    )));
                }
                let rid = record_id(TABLE, &id)?;
                self.base.db().create(rid).content(category).await?
            }
            None => self.base.db().create(TABLE).content(category).await?,
        };

        created.ok_or_else(|| RepoError::Database("Failed to create category".to_string()))
    }

    pub async fn update(&self, id: &str, data: CategoryUpdate) -> RepoResult<Category> {
        if self.find_by_id(id).await?.is_none() {
            return Err(RepoError::NotFound(format!("Category {} not found", id)));
        }

        let rid = record_id(TABLE, id)?;
        self.base
            .db()
            .query("UPDATE $thing SET name = $name")
            .bind(("thing", rid))
            .bind(("name", data.name))
            .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Category {} not found", id)))
    }
}
