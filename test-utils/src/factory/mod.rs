//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories create their own dependencies where a row
//! references another table, making tests more concise and maintainable.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let location = factory::create_location(&db).await?;
//!
//!     // Create a trip along with its location and transporter
//!     let (location, transporter, trip) = factory::helpers::create_trip_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let trip = factory::trip::TripFactory::new(&db, &location.id, &transporter.id)
//!     .slno("SL-001")
//!     .completed()
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `location` - Create location entities
//! - `transporter` - Create transporter entities
//! - `user` - Create user entities
//! - `app_version` - Create app version entities
//! - `trip` - Create trip entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod app_version;
pub mod helpers;
pub mod location;
pub mod transporter;
pub mod trip;
pub mod user;

pub use app_version::create_app_version;
pub use location::create_location;
pub use transporter::create_transporter;
pub use trip::create_trip;
pub use user::create_user;
