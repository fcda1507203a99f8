use chrono::{DateTime, Utc};
use entity::app_version::{ActiveModel, Column, Entity, Model};
use sea_orm::ActiveValue;

use crate::{
    model::app_version::{AppVersionDto, CreateAppVersionDto, UpdateAppVersionDto},
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

/// A published mobile client release.
#[derive(Debug, Clone, PartialEq)]
pub struct AppVersion {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub version: String,
    pub additional_info: Option<String>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_by: String,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CreateAppVersionParams {
    pub title: String,
    pub version: String,
    pub description: Option<String>,
    pub additional_info: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct AppVersionPatch {
    pub title: Option<String>,
    pub version: Option<String>,
    pub description: Option<String>,
    pub additional_info: Option<String>,
}

impl CatalogRecord for AppVersion {
    type Entity = Entity;
    type Model = Model;
    type ActiveModel = ActiveModel;
    type Create = CreateAppVersionParams;
    type Patch = AppVersionPatch;

    const RESOURCE: Resource = Resource::AppVersion;

    fn id_column() -> Column {
        Column::Id
    }

    fn natural_key_column() -> Column {
        Column::Version
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
            title: model.title,
            description: model.description,
            version: model.version,
            additional_info: model.additional_info,
            created_by: model.created_by,
            created_at: model.created_at,
            updated_by: model.updated_by,
            updated_at: model.updated_at,
        })
    }

    fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            id: ActiveValue::Set(self.id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            version: ActiveValue::Set(self.version),
            additional_info: ActiveValue::Set(self.additional_info),
            created_by: ActiveValue::Set(self.created_by),
            created_at: ActiveValue::Set(self.created_at),
            updated_by: ActiveValue::Set(self.updated_by),
            updated_at: ActiveValue::Set(self.updated_at),
            deleted: ActiveValue::Set(false),
        }
    }

    fn create(id: String, input: CreateAppVersionParams, audit: &Audit) -> Self {
        Self {
            id,
            title: input.title,
            description: input.description,
            version: input.version,
            additional_info: input.additional_info,
            created_by: audit.actor.clone(),
            created_at: audit.at,
            updated_by: audit.actor.clone(),
            updated_at: audit.at,
        }
    }

    fn apply(self, patch: AppVersionPatch, audit: &Audit) -> Self {
        Self {
            title: merge_required_text(self.title, patch.title),
            version: merge_required_text(self.version, patch.version),
            description: merge_optional(self.description, patch.description),
            additional_info: merge_optional(self.additional_info, patch.additional_info),
            updated_by: audit.actor.clone(),
            updated_at: audit.at,
            ..self
        }
    }
}

impl CatalogResource for AppVersion {
    type CreateDto = CreateAppVersionDto;
    type UpdateDto = UpdateAppVersionDto;
    type Dto = AppVersionDto;

    const SINGULAR: &'static str = "appVersion";
    const PLURAL: &'static str = "appVersions";

    fn create_from_dto(dto: CreateAppVersionDto) -> CreateAppVersionParams {
        CreateAppVersionParams {
            title: dto.title.trim().to_string(),
            version: dto.version.trim().to_string(),
            description: dto.description,
            additional_info: dto.additional_info,
        }
    }

    fn patch_from_dto(dto: UpdateAppVersionDto) -> AppVersionPatch {
        AppVersionPatch {
            title: dto.title,
            version: dto.version,
            description: dto.description,
            additional_info: dto.additional_info,
        }
    }

    fn into_dto(self) -> AppVersionDto {
        AppVersionDto {
            id: self.id,
            title: self.title,
            description: self.description,
            version: self.version,
            additional_info: self.additional_info,
            created_by: self.created_by,
            created_at: self.created_at,
            updated_by: self.updated_by,
            updated_at: self.updated_at,
        }
    }
}
