use sea_orm_migration::prelude::*;

/// Partial unique indexes keeping natural keys unique among live rows.
///
/// Each entry is `(table, statement)`. Soft-deleted rows fall outside the index, so a
/// natural key may be reused once its previous holder has been deleted.
pub const NATURAL_KEY_INDEXES: &[(&str, &str)] = &[
    (
        "trips",
        "CREATE UNIQUE INDEX IF NOT EXISTS uq_trips_slno_live ON trips (slno) WHERE deleted = false",
    ),
    (
        "transporters",
        "CREATE UNIQUE INDEX IF NOT EXISTS uq_transporters_name_live ON transporters (name) WHERE deleted = false",
    ),
    (
        "users",
        "CREATE UNIQUE INDEX IF NOT EXISTS uq_users_mobile_number_live ON users (mobile_number) WHERE deleted = false",
    ),
    (
        "locations",
        "CREATE UNIQUE INDEX IF NOT EXISTS uq_locations_name_live ON locations (name) WHERE deleted = false",
    ),
    (
        "app_versions",
        "CREATE UNIQUE INDEX IF NOT EXISTS uq_app_versions_version_live ON app_versions (version) WHERE deleted = false",
    ),
];

/// Returns the natural-key index statement for a table, if it has one.
pub fn natural_key_index(table: &str) -> Option<&'static str> {
    NATURAL_KEY_INDEXES
        .iter()
        .find(|(name, _)| *name == table)
        .map(|(_, stmt)| *stmt)
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        for (_, stmt) in NATURAL_KEY_INDEXES {
            db.execute_unprepared(stmt).await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        for name in [
            "uq_trips_slno_live",
            "uq_transporters_name_live",
            "uq_users_mobile_number_live",
            "uq_locations_name_live",
            "uq_app_versions_version_live",
        ] {
            db.execute_unprepared(&format!("DROP INDEX IF EXISTS {name}"))
                .await?;
        }

        Ok(())
    }
}
