//! Brand Repository

use super::{BaseRepository, RepoError, RepoResult, record_id};
use crate::db::models::{Brand, BrandCreate, BrandUpdate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "brand";

#[derive(Clone)]
pub struct BrandRepository {
    base: BaseRepository,
}

impl BrandRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_all(&self) -> RepoResult<Vec<Brand>> {
        let brands: Vec<Brand> = self.base.db().query("SELECT * FROM brand").await?.take(0)?;
        Ok(brands)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Brand>> {
        let rid = record_id(TABLE, id)?;
        let brand: Option<Brand> = self.base.db().select(rid).await?;
        Ok(brand)
    }

    /// Create a brand; a caller-chosen id that already exists is a
    /// Duplicate and existing rows stay untouched
    pub async fn create(&self, data: BrandCreate) -> RepoResult<Brand> {
        let brand = Brand {
            id: None,
            name: data.name,
        };

        let created: Option<Brand> = match data.id {
            Some(id) => {
                if self.find_by_id(&id).await?.is_some() {
                    return Err(RepoError::Duplicate(format!("Brand {} already exists", id)));
                }
                let rid = record_id(TABLE, &id)?;
                self.base.db().create(rid).content(brand).await?
            }
            None => self.base.db().create(TABLE).content(brand).await?,
        };

        created.ok_or_else(|| RepoError::Database("Failed to create brand".to_string()))
    }

    pub async fn update(&self, id: &str, data: BrandUpdate) -> RepoResult<Brand> {
        if self.find_by_id(id).await?.is_none() {
            return Err(RepoError::NotFound(format!("Brand {} not found", id)));
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
            .ok_or_else(|| RepoError::NotFound(format!("Brand {} not found", id)))
    }
}
