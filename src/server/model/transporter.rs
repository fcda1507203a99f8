use chrono::{DateTime, Utc};
use entity::transporter::{ActiveModel, Column, Entity, Model};
use sea_orm::ActiveValue;

use crate::{
    model::transporter::{CreateTransporterDto, TransporterDto, UpdateTransporterDto},
    server::{
        error::AppError,
        model::{
            audit::Audit,
            catalog::{CatalogRecord, CatalogResource},
            patch::merge_required_text,
            resource::Resource,
        },
    },
};

/// A carrier company trips are assigned to.
#[derive(Debug, Clone, PartialEq)]
pub struct Transporter {
    pub id: String,
    pub name: String,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_by: String,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CreateTransporterParams {
    pub name: String,
}

#[derive(Debug, Clone, Default)]
pub struct TransporterPatch {
    pub name: Option<String>,
}

impl CatalogRecord for Transporter {
    type Entity = Entity;
    type Model = Model;
    type ActiveModel = ActiveModel;
    type Create = CreateTransporterParams;
    type Patch = TransporterPatch;

    const RESOURCE: Resource = Resource::Transporter;

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
            created_by: ActiveValue::Set(self.created_by),
            created_at: ActiveValue::Set(self.created_at),
            updated_by: ActiveValue::Set(self.updated_by),
            updated_at: ActiveValue::Set(self.updated_at),
            deleted: ActiveValue::Set(false),
        }
    }

    fn create(id: String, input: CreateTransporterParams, audit: &Audit) -> Self {
        Self {
            id,
            name: input.name,
            created_by: audit.actor.clone(),
            created_at: audit.at,
            updated_by: audit.actor.clone(),
            updated_at: audit.at,
        }
    }

    fn apply(self, patch: TransporterPatch, audit: &Audit) -> Self {
        Self {
            name: merge_required_text(self.name, patch.name),
            updated_by: audit.actor.clone(),
            updated_at: audit.at,
            ..self
        }
    }
}

impl CatalogResource for Transporter {
    type CreateDto = CreateTransporterDto;
    type UpdateDto = UpdateTransporterDto;
    type Dto = TransporterDto;

    const SINGULAR: &'static str = "transporter";
    const PLURAL: &'static str = "transporters";

    fn create_from_dto(dto: CreateTransporterDto) -> CreateTransporterParams {
        CreateTransporterParams {
            name: dto.name.trim().to_string(),
        }
    }

    fn patch_from_dto(dto: UpdateTransporterDto) -> TransporterPatch {
        TransporterPatch { name: dto.name }
    }

    fn into_dto(self) -> TransporterDto {
        TransporterDto {
            id: self.id,
            name: self.name,
            created_by: self.created_by,
            created_at: self.created_at,
            updated_by: self.updated_by,
            updated_at: self.updated_at,
        }
    }
}
