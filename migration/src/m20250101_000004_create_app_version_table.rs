use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AppVersion::Table)
                    .if_not_exists()
                    .col(string(AppVersion::Id).primary_key())
                    .col(string(AppVersion::Title))
                    .col(text_null(AppVersion::Description))
                    .col(string(AppVersion::Version))
                    .col(text_null(AppVersion::AdditionalInfo))
                    .col(string(AppVersion::CreatedBy))
                    .col(timestamp_with_time_zone(AppVersion::CreatedAt))
                    .col(string(AppVersion::UpdatedBy))
                    .col(timestamp_with_time_zone(AppVersion::UpdatedAt))
                    .col(boolean(AppVersion::Deleted).default(false))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AppVersion::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AppVersion {
    #[sea_orm(iden = "app_versions")]
    Table,
    Id,
    Title,
    Description,
    Version,
    AdditionalInfo,
    CreatedBy,
    CreatedAt,
    UpdatedBy,
    UpdatedAt,
    Deleted,
}
