use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250101_000001_create_location_table::Location,
    m20250101_000002_create_transporter_table::Transporter,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Trip::Table)
                    .if_not_exists()
                    .col(string(Trip::Id).primary_key())
                    .col(string(Trip::Slno))
                    .col(string(Trip::VehicleNo))
                    .col(string(Trip::Status).default("pending"))
                    .col(string(Trip::PickupLocation))
                    .col(string(Trip::TransporterId))
                    .col(string(Trip::ProductType))
                    .col(double(Trip::ProductWeight))
                    .col(text(Trip::ProductBillImage).default(""))
                    .col(text(Trip::PickupProductLocationImage).default(""))
                    .col(timestamp_with_time_zone(Trip::PickupDate))
                    .col(string(Trip::PickBy))
                    .col(string_null(Trip::DropLocation))
                    .col(text_null(Trip::DropProductLocationImage))
                    .col(timestamp_with_time_zone_null(Trip::DropDate))
                    .col(string_null(Trip::DropBy))
                    .col(timestamp_with_time_zone(Trip::CreatedAt))
                    .col(string(Trip::UpdatedBy))
                    .col(timestamp_with_time_zone(Trip::UpdatedAt))
                    .col(boolean(Trip::Deleted).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trip_pickup_location")
                            .from(Trip::Table, Trip::PickupLocation)
                            .to(Location::Table, Location::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trip_drop_location")
                            .from(Trip::Table, Trip::DropLocation)
                            .to(Location::Table, Location::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trip_transporter_id")
                            .from(Trip::Table, Trip::TransporterId)
                            .to(Transporter::Table, Transporter::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_trips_pickup_date")
                    .table(Trip::Table)
                    .col(Trip::PickupDate)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Trip::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Trip {
    #[sea_orm(iden = "trips")]
    Table,
    Id,
    Slno,
    VehicleNo,
    Status,
    PickupLocation,
    TransporterId,
    ProductType,
    ProductWeight,
    ProductBillImage,
    PickupProductLocationImage,
    PickupDate,
    PickBy,
    DropLocation,
    DropProductLocationImage,
    DropDate,
    DropBy,
    CreatedAt,
    UpdatedBy,
    UpdatedAt,
    Deleted,
}
