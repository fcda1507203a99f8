use sea_orm::entity::prelude::*;

/// A shipment from pickup to drop.
///
/// `status` holds `pending` or `completed`. Image columns store public object-storage
/// URLs, or an empty string when no image was supplied.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "trips")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub slno: String,
    pub vehicle_no: String,
    pub status: String,
    pub pickup_location: String,
    pub transporter_id: String,
    pub product_type: String,
    pub product_weight: f64,
    pub product_bill_image: String,
    pub pickup_product_location_image: String,
    pub pickup_date: DateTimeUtc,
    pub pick_by: String,
    pub drop_location: Option<String>,
    pub drop_product_location_image: Option<String>,
    pub drop_date: Option<DateTimeUtc>,
    pub drop_by: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_by: String,
    pub updated_at: DateTimeUtc,
    pub deleted: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
