pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_location_table;
mod m20250101_000002_create_transporter_table;
mod m20250101_000003_create_user_table;
mod m20250101_000004_create_app_version_table;
mod m20250101_000005_create_trip_table;
mod m20250102_000006_create_natural_key_indexes;

pub use m20250102_000006_create_natural_key_indexes::{natural_key_index, NATURAL_KEY_INDEXES};

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_location_table::Migration),
            Box::new(m20250101_000002_create_transporter_table::Migration),
            Box::new(m20250101_000003_create_user_table::Migration),
            Box::new(m20250101_000004_create_app_version_table::Migration),
            Box::new(m20250101_000005_create_trip_table::Migration),
            Box::new(m20250102_000006_create_natural_key_indexes::Migration),
        ]
    }
}
