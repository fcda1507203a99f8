//! Field-mapping hooks shared by every soft-deletable record.
//!
//! `CatalogRecord` ties a domain model to its SeaORM entity so one repository and one
//! service can serve every table. Implementations only map fields; lookups, conflict
//! handling and soft deletion live in `data::catalog` and `service::catalog`.
//! `CatalogResource` adds the wire types for records exposed through the generic
//! controller.

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, EntityTrait, FromQueryResult, IntoActiveModel,
    ModelTrait,
};
use serde::{de::DeserializeOwned, Serialize};
use validator::Validate;

use crate::server::{
    error::AppError,
    model::{audit::Audit, resource::Resource},
};

/// Column type of a record's entity.
pub type ColumnOf<R> = <<R as CatalogRecord>::Entity as EntityTrait>::Column;

/// A domain model stored in a soft-deletable table with a string id and a natural key.
pub trait CatalogRecord: Sized + Send + Sync + 'static {
    type Entity: EntityTrait<Model = Self::Model, ActiveModel = Self::ActiveModel>;
    type Model: ModelTrait<Entity = Self::Entity>
        + FromQueryResult
        + IntoActiveModel<Self::ActiveModel>
        + Send
        + Sync;
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity> + ActiveModelBehavior + Send + Sync;

    /// Input for creating a record, already validated.
    type Create: Send;
    /// Presence-tracked partial update.
    type Patch: Send;

    const RESOURCE: Resource;

    fn id_column() -> ColumnOf<Self>;
    /// Column unique among live rows.
    fn natural_key_column() -> ColumnOf<Self>;
    fn deleted_column() -> ColumnOf<Self>;
    fn created_at_column() -> ColumnOf<Self>;
    fn updated_at_column() -> ColumnOf<Self>;
    fn updated_by_column() -> ColumnOf<Self>;

    fn id(&self) -> &str;

    /// Converts an entity model into the domain model.
    fn from_entity(model: Self::Model) -> Result<Self, AppError>;

    /// Converts the domain model into an active model with every column set.
    fn into_active_model(self) -> Self::ActiveModel;

    /// Builds a new live record.
    fn create(id: String, input: Self::Create, audit: &Audit) -> Self;

    /// Merges a partial update and stamps the update audit columns.
    fn apply(self, patch: Self::Patch, audit: &Audit) -> Self;
}

/// A catalog record served by the generic CRUD controller.
pub trait CatalogResource: CatalogRecord {
    type CreateDto: DeserializeOwned + Validate + Send + 'static;
    type UpdateDto: DeserializeOwned + Validate + Send + 'static;
    type Dto: Serialize + Send;

    /// Key wrapping a single record in response payloads, e.g. `{"transporter": ...}`.
    const SINGULAR: &'static str;
    /// Key wrapping a list of records in response payloads.
    const PLURAL: &'static str;

    fn create_from_dto(dto: Self::CreateDto) -> Self::Create;
    fn patch_from_dto(dto: Self::UpdateDto) -> Self::Patch;
    fn into_dto(self) -> Self::Dto;
}
