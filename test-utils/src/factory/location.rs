//! Location factory for creating test location entities.

use crate::factory::helpers::{next_id, FACTORY_ACTOR};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test locations with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let location = LocationFactory::new(&db).name("Warehouse A").build().await?;
/// ```
pub struct LocationFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    name: String,
    address: Option<String>,
    deleted: bool,
}

impl<'a> LocationFactory<'a> {
    /// Creates a new LocationFactory with default values.
    ///
    /// Defaults:
    /// - id: `"location-{n}"`
    /// - name: `"Location {n}"`
    /// - address: `None`
    /// - deleted: `false`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let n = next_id();
        Self {
            db,
            id: format!("location-{}", n),
            name: format!("Location {}", n),
            address: None,
            deleted: false,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Marks the location as soft-deleted.
    pub fn deleted(mut self) -> Self {
        self.deleted = true;
        self
    }

    /// Builds and inserts the location entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::location::Model)` - Created location entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::location::Model, DbErr> {
        let now = Utc::now();
        entity::location::ActiveModel {
            id: ActiveValue::Set(self.id),
            name: ActiveValue::Set(self.name),
            latitude: ActiveValue::Set(None),
            longitude: ActiveValue::Set(None),
            address: ActiveValue::Set(self.address),
            created_by: ActiveValue::Set(FACTORY_ACTOR.to_string()),
            created_at: ActiveValue::Set(now),
            updated_by: ActiveValue::Set(FACTORY_ACTOR.to_string()),
            updated_at: ActiveValue::Set(now),
            deleted: ActiveValue::Set(self.deleted),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a location with default values.
///
/// Shorthand for `LocationFactory::new(db).build().await`.
pub async fn create_location(db: &DatabaseConnection) -> Result<entity::location::Model, DbErr> {
    LocationFactory::new(db).build().await
}
