//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Actor recorded in audit columns of factory-created rows.
pub const FACTORY_ACTOR: &str = "factory";

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a pending trip together with the location and transporter it references.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((location, transporter, trip))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_trip_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::location::Model,
        entity::transporter::Model,
        entity::trip::Model,
    ),
    DbErr,
> {
    let location = crate::factory::location::create_location(db).await?;
    let transporter = crate::factory::transporter::create_transporter(db).await?;
    let trip = crate::factory::trip::create_trip(db, &location.id, &transporter.id).await?;

    Ok((location, transporter, trip))
}
