//! Generic repository for soft-deletable records.
//!
//! Every query filters out soft-deleted rows. Writes surface unique-index violations as
//! `DbErr`; callers map them to `AppError::Duplicate` with `AppError::from_write`.

use std::marker::PhantomData;

use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Select,
};

use crate::server::{
    error::AppError,
    model::{audit::Audit, catalog::CatalogRecord},
};

/// Repository providing CRUD for any [`CatalogRecord`].
///
/// # Example
///
/// ```rust,ignore
/// let repo = CatalogRepository::<Transporter>::new(&db);
/// let transporter = repo.find_by_id("transporter-1").await?;
/// ```
pub struct CatalogRepository<'a, R> {
    db: &'a DatabaseConnection,
    record: PhantomData<R>,
}

impl<'a, R: CatalogRecord> CatalogRepository<'a, R> {
    /// Creates a new CatalogRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            record: PhantomData,
        }
    }

    /// Select over rows that have not been soft-deleted.
    pub fn live() -> Select<R::Entity> {
        R::Entity::find().filter(R::deleted_column().eq(false))
    }

    /// Finds a live record by id.
    ///
    /// # Returns
    /// - `Ok(Some(R))` - Record found
    /// - `Ok(None)` - No live record with this id
    /// - `Err(AppError)` - Database error or unconvertible row
    pub async fn find_by_id(&self, id: &str) -> Result<Option<R>, AppError> {
        Self::live()
            .filter(R::id_column().eq(id))
            .one(self.db)
            .await?
            .map(R::from_entity)
            .transpose()
    }

    /// Finds the live record holding a natural key.
    pub async fn find_by_natural_key(&self, key: &str) -> Result<Option<R>, AppError> {
        Self::live()
            .filter(R::natural_key_column().eq(key))
            .one(self.db)
            .await?
            .map(R::from_entity)
            .transpose()
    }

    /// Lists live records, newest first.
    pub async fn list(&self) -> Result<Vec<R>, AppError> {
        Self::live()
            .order_by_desc(R::created_at_column())
            .all(self.db)
            .await?
            .into_iter()
            .map(R::from_entity)
            .collect()
    }

    /// Returns the most recently created live record.
    pub async fn latest(&self) -> Result<Option<R>, AppError> {
        Self::live()
            .order_by_desc(R::created_at_column())
            .one(self.db)
            .await?
            .map(R::from_entity)
            .transpose()
    }

    /// Inserts a new record.
    ///
    /// # Returns
    /// - `Ok(R)` - The inserted record as stored
    /// - `Err(AppError::DbErr)` - Database error, including unique-index violations
    pub async fn insert(&self, record: R) -> Result<R, AppError> {
        let model = record.into_active_model().insert(self.db).await?;

        R::from_entity(model)
    }

    /// Writes every column of a live record except the soft-delete flag.
    ///
    /// # Returns
    /// - `Ok(Some(R))` - The updated record as stored
    /// - `Ok(None)` - The record is absent or was soft-deleted since it was loaded
    /// - `Err(AppError::DbErr)` - Database error, including unique-index violations
    pub async fn update(&self, record: R) -> Result<Option<R>, AppError> {
        let id = record.id().to_string();
        let mut model = record.into_active_model();
        model.not_set(R::deleted_column());

        let result = R::Entity::update_many()
            .set(model)
            .filter(R::id_column().eq(id.as_str()))
            .filter(R::deleted_column().eq(false))
            .exec(self.db)
            .await?;
        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.find_by_id(&id).await
    }

    /// Soft-deletes a live record.
    ///
    /// # Returns
    /// - `Ok(true)` - The record was live and is now deleted
    /// - `Ok(false)` - No live record with this id
    /// - `Err(AppError)` - Database error
    pub async fn soft_delete(&self, id: &str, audit: &Audit) -> Result<bool, AppError> {
        let result = R::Entity::update_many()
            .col_expr(R::deleted_column(), Expr::value(true))
            .col_expr(R::updated_by_column(), Expr::value(audit.actor.clone()))
            .col_expr(R::updated_at_column(), Expr::value(audit.at))
            .filter(R::id_column().eq(id))
            .filter(R::deleted_column().eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
