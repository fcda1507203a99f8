//! SeaORM entity models for the tripboard database.
//!
//! Every table carries the same audit shape (`created_by`, `created_at`, `updated_by`,
//! `updated_at`) and a `deleted` flag used for soft deletion. Natural keys are not marked
//! unique on the entity itself; uniqueness among live rows is enforced by partial indexes
//! created in the `migration` crate.

pub mod prelude;

pub mod app_version;
pub mod location;
pub mod transporter;
pub mod trip;
pub mod user;
