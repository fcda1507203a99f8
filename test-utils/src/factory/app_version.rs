//! App version factory for creating test app version entities.

use crate::factory::helpers::{next_id, FACTORY_ACTOR};
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test app versions with customizable fields.
///
/// `created_at` can be pinned so tests can control which release counts as latest.
pub struct AppVersionFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    title: String,
    version: String,
    created_at: DateTime<Utc>,
    deleted: bool,
}

impl<'a> AppVersionFactory<'a> {
    /// Creates a new AppVersionFactory with default values.
    ///
    /// Defaults:
    /// - id: `"app-version-{n}"`
    /// - title: `"Release {n}"`
    /// - version: `"1.0.{n}"`
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let n = next_id();
        Self {
            db,
            id: format!("app-version-{}", n),
            title: format!("Release {}", n),
            version: format!("1.0.{}", n),
            created_at: Utc::now(),
            deleted: false,
        }
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Marks the app version as soft-deleted.
    pub fn deleted(mut self) -> Self {
        self.deleted = true;
        self
    }

    /// Builds and inserts the app version entity into the database.
    pub async fn build(self) -> Result<entity::app_version::Model, DbErr> {
        entity::app_version::ActiveModel {
            id: ActiveValue::Set(self.id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(None),
            version: ActiveValue::Set(self.version),
            additional_info: ActiveValue::Set(None),
            created_by: ActiveValue::Set(FACTORY_ACTOR.to_string()),
            created_at: ActiveValue::Set(self.created_at),
            updated_by: ActiveValue::Set(FACTORY_ACTOR.to_string()),
            updated_at: ActiveValue::Set(self.created_at),
            deleted: ActiveValue::Set(self.deleted),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an app version with default values.
pub async fn create_app_version(
    db: &DatabaseConnection,
) -> Result<entity::app_version::Model, DbErr> {
    AppVersionFactory::new(db).build().await
}
