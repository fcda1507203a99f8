//! Transporter factory for creating test transporter entities.

use crate::factory::helpers::{next_id, FACTORY_ACTOR};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test transporters with customizable fields.
pub struct TransporterFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    name: String,
    deleted: bool,
}

impl<'a> TransporterFactory<'a> {
    /// Creates a new TransporterFactory with default values.
    ///
    /// Defaults:
    /// - id: `"transporter-{n}"`
    /// - name: `"Transporter {n}"`
    /// - deleted: `false`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let n = next_id();
        Self {
            db,
            id: format!("transporter-{}", n),
            name: format!("Transporter {}", n),
            deleted: false,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Marks the transporter as soft-deleted.
    pub fn deleted(mut self) -> Self {
        self.deleted = true;
        self
    }

    /// Builds and inserts the transporter entity into the database.
    pub async fn build(self) -> Result<entity::transporter::Model, DbErr> {
        let now = Utc::now();
        entity::transporter::ActiveModel {
            id: ActiveValue::Set(self.id),
            name: ActiveValue::Set(self.name),
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

/// Creates a transporter with default values.
pub async fn create_transporter(
    db: &DatabaseConnection,
) -> Result<entity::transporter::Model, DbErr> {
    TransporterFactory::new(db).build().await
}

/// Creates a transporter with a specific name.
///
/// Shorthand for `TransporterFactory::new(db).name(name).build().await`.
pub async fn create_transporter_named(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::transporter::Model, DbErr> {
    TransporterFactory::new(db).name(name).build().await
}
