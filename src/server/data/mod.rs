//! Database repository layer.
//!
//! Repositories handle all SeaORM queries and writes and return domain models from
//! `server::model`, keeping entity types out of the service layer. Every read filters out
//! soft-deleted rows except trip name resolution, which also resolves deleted catalog rows.

pub mod catalog;
pub mod trip;

#[cfg(test)]
mod test;
