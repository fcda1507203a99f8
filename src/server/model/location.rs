use chrono::{DateTime, Utc};
use entity::location::{ActiveModel, Column, Entity, Model};
use sea_orm::ActiveValue;

use crate::{
    model::location::{CreateLocationDto, LocationDto, UpdateLocationDto},
    server::{
        error::AppError,
        model::{
            audit::Audit,
            catalog::{CatalogRecord, CatalogResource},
            patch::{merge_optional, merge_required_text},
            resource::Resource,
        },
    },
};

/// A named pickup or drop point.
///
/// Coordinates are kept as the strings clients send; no geographic validation is done.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub id: String,
    pub name: String,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub address: Option<String>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_by: String,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CreateLocationParams {
    pub name: String,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct LocationPatch {
    pub name: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub address: Option<String>,
}

impl CatalogRecord for Location {
    type Entity = Entity;
    type Model = Model;
    type ActiveModel = ActiveModel;
    type Create = CreateLocationParams;
    type Patch = LocationPatch;

    const RESOURCE: Resource = Resource::Location;

    fn id_column() -> Column {
        Column::Id
    }

    fn natural_key_column() -> Column {
        Column::Name
    }

    fn deleted_column() -> Column {
        Column::Deleted
    }

    fn created_at_column() -> Column {
        Column::CreatedAt
    }

    fn updated_at_column() -> Column {
        Column::UpdatedAt
    }

    fn updated_by_column() -> Column {
        Column::UpdatedBy
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn from_entity(model: Model) -> Result<Self, AppError> {
        Ok(Self {
            id: model.id,
            name: model.name,
            latitude: model.latitude,
            longitude: model.longitude,
            address: model.address,
            created_by: model.created_by,
            created_at: model.created_at,
            updated_by: model.updated_by,
            updated_at: model.updated_at,
        })
    }

    fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            id: ActiveValue::Set(self.id),
            name: ActiveValue::Set(self.name),
            latitude: ActiveValue::Set(self.latitude),
            longitude: ActiveValue::Set(self.longitude),
            address: ActiveValue::Set(self.address),
            created_by: ActiveValue::Set(self.created_by),
            created_at: ActiveValue::Set(self.created_at),
            updated_by: ActiveValue::Set(self.updated_by),
            updated_at: ActiveValue::Set(self.updated_at),
            deleted: ActiveValue::Set(false),
        }
    }

    fn create(id: String, input: CreateLocationParams, audit: &Audit) -> Self {
        Self {
            id,
            name: input.name,
            latitude: input.latitude,
            longitude: input.longitude,
            address: input.address,
            created_by: audit.actor.clone(),
            created_at: audit.at,
            updated_by: audit.actor.clone(),
            updated_at: audit.at,
        }
    }

    fn apply(self, patch: LocationPatch, audit: &Audit) -> Self {
        Self {
            name: merge_required_text(self.name, patch.name),
            latitude: merge_optional(self.latitude, patch.latitude),
            longitude: merge_optional(self.longitude, patch.longitude),
            address: merge_optional(self.address, patch.address),
            updated_by: audit.actor.clone(),
            updated_at: audit.at,
            ..self
        }
    }
}

impl CatalogResource for Location {
    type CreateDto = CreateLocationDto;
    type UpdateDto = UpdateLocationDto;
    type Dto = LocationDto;

    const SINGULAR: &'static str = "location";
    const PLURAL: &'static str = "locations";

    fn create_from_dto(dto: CreateLocationDto) -> CreateLocationParams {
        CreateLocationParams {
            name: dto.name.trim().to_string(),
            latitude: dto.latitude,
            longitude: dto.longitude,
            address: dto.address,
        }
    }

    fn patch_from_dto(dto: UpdateLocationDto) -> LocationPatch {
        LocationPatch {
            name: dto.name,
            latitude: dto.latitude,
            longitude: dto.longitude,
            address: dto.address,
        }
    }

    fn into_dto(self) -> LocationDto {
        LocationDto {
            id: self.id,
            name: self.name,
            latitude: self.latitude,
            longitude: self.longitude,
            address: self.address,
            created_by: self.created_by,
            created_at: self.created_at,
            updated_by: self.updated_by,
            updated_at: self.updated_at,
        }
    }
}
