use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Transporter::Table)
                    .if_not_exists()
                    .col(string(Transporter::Id).primary_key())
                    .col(string(Transporter::Name))
                    .col(string(Transporter::CreatedBy))
                    .col(timestamp_with_time_zone(Transporter::CreatedAt))
                    .col(string(Transporter::UpdatedBy))
                    .col(timestamp_with_time_zone(Transporter::UpdatedAt))
                    .col(boolean(Transporter::Deleted).default(false))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Transporter::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Transporter {
    #[sea_orm(iden = "transporters")]
    Table,
    Id,
    Name,
    CreatedBy,
    CreatedAt,
    UpdatedBy,
    UpdatedAt,
    Deleted,
}
