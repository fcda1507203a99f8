use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Location::Table)
                    .if_not_exists()
                    .col(string(Location::Id).primary_key())
                    .col(string(Location::Name))
                    .col(string_null(Location::Latitude))
                    .col(string_null(Location::Longitude))
                    .col(text_null(Location::Address))
                    .col(string(Location::CreatedBy))
                    .col(timestamp_with_time_zone(Location::CreatedAt))
                    .col(string(Location::UpdatedBy))
                    .col(timestamp_with_time_zone(Location::UpdatedAt))
                    .col(boolean(Location::Deleted).default(false))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Location::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Location {
    #[sea_orm(iden = "locations")]
    Table,
    Id,
    Name,
    Latitude,
    Longitude,
    Address,
    CreatedBy,
    CreatedAt,
    UpdatedBy,
    UpdatedAt,
    Deleted,
}
