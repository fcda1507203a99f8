//! User factory for creating test user entities.

use crate::factory::helpers::{next_id, FACTORY_ACTOR};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let user = UserFactory::new(&db)
///     .mobile_number("9000000001")
///     .user_role("driver")
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    name: String,
    mobile_number: String,
    user_role: String,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - id: `"user-{n}"`
    /// - name: `"User {n}"`
    /// - mobile_number: ten digits derived from `n`
    /// - user_role: `"operator"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let n = next_id();
        Self {
            db,
            id: format!("user-{}", n),
            name: format!("User {}", n),
            mobile_number: format!("{:010}", n),
            user_role: "operator".to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn mobile_number(mut self, mobile_number: impl Into<String>) -> Self {
        self.mobile_number = mobile_number.into();
        self
    }

    pub fn user_role(mut self, user_role: impl Into<String>) -> Self {
        self.user_role = user_role.into();
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now();
        entity::user::ActiveModel {
            id: ActiveValue::Set(self.id),
            name: ActiveValue::Set(self.name),
            mobile_number: ActiveValue::Set(self.mobile_number),
            user_role: ActiveValue::Set(self.user_role),
            account_status: ActiveValue::Set("active".to_string()),
            created_by: ActiveValue::Set(FACTORY_ACTOR.to_string()),
            created_at: ActiveValue::Set(now),
            updated_by: ActiveValue::Set(FACTORY_ACTOR.to_string()),
            updated_at: ActiveValue::Set(now),
            deleted: ActiveValue::Set(false),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}
