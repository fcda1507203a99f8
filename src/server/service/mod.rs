//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They turn lookups of
//! missing rows into `NotFound`, map unique-index violations to `Duplicate`, stamp audit
//! columns and, for trips, upload proof images before anything is persisted.

pub mod catalog;
pub mod export;
pub mod trip;

#[cfg(test)]
mod test;
