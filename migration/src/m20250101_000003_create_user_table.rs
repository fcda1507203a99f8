use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(string(User::Id).primary_key())
                    .col(string(User::Name))
                    .col(string(User::MobileNumber))
                    .col(string(User::UserRole))
                    .col(string(User::AccountStatus).default("active"))
                    .col(string(User::CreatedBy))
                    .col(timestamp_with_time_zone(User::CreatedAt))
                    .col(string(User::UpdatedBy))
                    .col(timestamp_with_time_zone(User::UpdatedAt))
                    .col(boolean(User::Deleted).default(false))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Name,
    MobileNumber,
    UserRole,
    AccountStatus,
    CreatedBy,
    CreatedAt,
    UpdatedBy,
    UpdatedAt,
    Deleted,
}
