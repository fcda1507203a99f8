use std::marker::PhantomData;

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::catalog::CatalogRepository,
    error::AppError,
    model::{audit::Audit, catalog::CatalogRecord},
};

/// CRUD service shared by every catalog record.
///
/// Natural-key collisions surface as `AppError::Duplicate` and lookups of absent or
/// soft-deleted records as `AppError::NotFound`, both tagged with the record's resource.
pub struct CatalogService<'a, R> {
    db: &'a DatabaseConnection,
    record: PhantomData<R>,
}

impl<'a, R: CatalogRecord> CatalogService<'a, R> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            record: PhantomData,
        }
    }

    fn repo(&self) -> CatalogRepository<'a, R> {
        CatalogRepository::new(self.db)
    }

    /// Creates a record under a fresh UUID.
    ///
    /// # Returns
    /// - `Ok(R)` - Created record
    /// - `Err(AppError::Duplicate)` - A live record already holds the natural key
    pub async fn create(&self, input: R::Create, audit: &Audit) -> Result<R, AppError> {
        let record = R::create(Uuid::new_v4().to_string(), input, audit);

        self.repo()
            .insert(record)
            .await
            .map_err(AppError::from_write(R::RESOURCE))
    }

    /// Gets a live record by id, failing with `NotFound` when absent.
    pub async fn get(&self, id: &str) -> Result<R, AppError> {
        self.repo()
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound(R::RESOURCE))
    }

    /// Lists live records, newest first.
    pub async fn list(&self) -> Result<Vec<R>, AppError> {
        self.repo().list().await
    }

    /// Applies a partial update to a live record.
    ///
    /// Existence is checked before anything is written.
    ///
    /// # Returns
    /// - `Ok(R)` - Updated record
    /// - `Err(AppError::NotFound)` - Record absent or soft-deleted
    /// - `Err(AppError::Duplicate)` - The new natural key is held by another live record
    pub async fn update(&self, id: &str, patch: R::Patch, audit: &Audit) -> Result<R, AppError> {
        let current = self.get(id).await?;

        self.repo()
            .update(current.apply(patch, audit))
            .await
            .map_err(AppError::from_write(R::RESOURCE))?
            .ok_or(AppError::NotFound(R::RESOURCE))
    }

    /// Soft-deletes a live record; deleting twice fails with `NotFound`.
    pub async fn delete(&self, id: &str, audit: &Audit) -> Result<(), AppError> {
        if !self.repo().soft_delete(id, audit).await? {
            return Err(AppError::NotFound(R::RESOURCE));
        }

        tracing::info!("{} {} deleted by {}", R::RESOURCE.noun(), id, audit.actor);

        Ok(())
    }

    /// Returns the most recently created live record, if any.
    pub async fn latest(&self) -> Result<Option<R>, AppError> {
        self.repo().latest().await
    }
}
