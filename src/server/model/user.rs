use chrono::{DateTime, Utc};
use entity::user::{ActiveModel, Column, Entity, Model};
use sea_orm::ActiveValue;

use crate::{
    model::user::{CreateUserDto, UpdateUserDto, UserDto},
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

/// Account status given to newly created users.
pub const DEFAULT_ACCOUNT_STATUS: &str = "active";

/// A field or office user, identified by mobile number.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub mobile_number: String,
    pub user_role: String,
    pub account_status: String,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_by: String,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub name: String,
    pub mobile_number: String,
    pub user_role: String,
}

#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub name: Option<String>,
    pub mobile_number: Option<String>,
    pub user_role: Option<String>,
    pub account_status: Option<String>,
}

impl CatalogRecord for User {
    type Entity = Entity;
    type Model = Model;
    type ActiveModel = ActiveModel;
    type Create = CreateUserParams;
    type Patch = UserPatch;

    const RESOURCE: Resource = Resource::User;

    fn id_column() -> Column {
        Column::Id
    }

    fn natural_key_column() -> Column {
        Column::MobileNumber
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
            mobile_number: model.mobile_number,
            user_role: model.user_role,
            account_status: model.account_status,
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
            mobile_number: ActiveValue::Set(self.mobile_number),
            user_role: ActiveValue::Set(self.user_role),
            account_status: ActiveValue::Set(self.account_status),
            created_by: ActiveValue::Set(self.created_by),
            created_at: ActiveValue::Set(self.created_at),
            updated_by: ActiveValue::Set(self.updated_by),
            updated_at: ActiveValue::Set(self.updated_at),
            deleted: ActiveValue::Set(false),
        }
    }

    fn create(id: String, input: CreateUserParams, audit: &Audit) -> Self {
        Self {
            id,
            name: input.name,
            mobile_number: input.mobile_number,
            user_role: input.user_role,
            account_status: DEFAULT_ACCOUNT_STATUS.to_string(),
            created_by: audit.actor.clone(),
            created_at: audit.at,
            updated_by: audit.actor.clone(),
            updated_at: audit.at,
        }
    }

    fn apply(self, patch: UserPatch, audit: &Audit) -> Self {
        Self {
            name: merge_required_text(self.name, patch.name),
            mobile_number: merge_required_text(self.mobile_number, patch.mobile_number),
            user_role: merge_required_text(self.user_role, patch.user_role),
            account_status: merge_required_text(self.account_status, patch.account_status),
            updated_by: audit.actor.clone(),
            updated_at: audit.at,
            ..self
        }
    }
}

impl CatalogResource for User {
    type CreateDto = CreateUserDto;
    type UpdateDto = UpdateUserDto;
    type Dto = UserDto;

    const SINGULAR: &'static str = "user";
    const PLURAL: &'static str = "users";

    fn create_from_dto(dto: CreateUserDto) -> CreateUserParams {
        CreateUserParams {
            name: dto.name.trim().to_string(),
            mobile_number: dto.mobile_number.trim().to_string(),
            user_role: dto.user_role.trim().to_string(),
        }
    }

    fn patch_from_dto(dto: UpdateUserDto) -> UserPatch {
        UserPatch {
            name: dto.name,
            mobile_number: dto.mobile_number,
            user_role: dto.user_role,
            account_status: dto.account_status,
        }
    }

    fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            mobile_number: self.mobile_number,
            user_role: self.user_role,
            account_status: self.account_status,
            created_by: self.created_by,
            created_at: self.created_at,
            updated_by: self.updated_by,
            updated_at: self.updated_at,
        }
    }
}
