//! Domain models and operation-specific parameter types.
//!
//! Models here sit between DTOs and SeaORM entities: controllers convert DTOs into
//! params, services work with domain models, and repositories convert entity models
//! through `CatalogRecord::from_entity`.

pub mod app_version;
pub mod audit;
pub mod catalog;
pub mod location;
pub mod patch;
pub mod resource;
pub mod transporter;
pub mod trip;
pub mod user;
