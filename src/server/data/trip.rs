//! Trip-specific queries.
//!
//! Plain inserts, updates and soft deletes go through `CatalogRepository<Trip>`. This
//! repository adds the joined read views, filtered listing and the status-only write
//! used when a trip is delivered.

use std::collections::{HashMap, HashSet};

use entity::trip::Column;
use sea_orm::{
    sea_query::Expr, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::catalog::CatalogRepository,
    error::AppError,
    model::{
        catalog::CatalogRecord,
        trip::{Trip, TripCompletion, TripFilter, TripStatus, TripView},
    },
};

pub struct TripRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TripRepository<'a> {
    /// Creates a new TripRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a live trip by id with location and transporter names attached.
    ///
    /// # Returns
    /// - `Ok(Some(TripView))` - Trip found
    /// - `Ok(None)` - No live trip with this id
    /// - `Err(AppError)` - Database error
    pub async fn find_view_by_id(&self, id: &str) -> Result<Option<TripView>, AppError> {
        let trip = CatalogRepository::<Trip>::new(self.db).find_by_id(id).await?;

        self.view_of(trip).await
    }

    /// Finds the live trip with this slno, with names attached.
    pub async fn find_view_by_slno(&self, slno: &str) -> Result<Option<TripView>, AppError> {
        let trip = CatalogRepository::<Trip>::new(self.db)
            .find_by_natural_key(slno)
            .await?;

        self.view_of(trip).await
    }

    /// Lists live trips matching every present filter field, newest pickup first.
    ///
    /// # Arguments
    /// - `filter` - Conjunctive filter; `None` fields are ignored and date bounds are
    ///   inclusive
    ///
    /// # Returns
    /// - `Ok(Vec<TripView>)` - Matching trips with names attached
    /// - `Err(AppError)` - Database error
    pub async fn list_views(&self, filter: &TripFilter) -> Result<Vec<TripView>, AppError> {
        let mut query = CatalogRepository::<Trip>::live();

        if let Some(slno) = &filter.slno {
            query = query.filter(Column::Slno.eq(slno.as_str()));
        }
        if let Some(status) = filter.status {
            query = query.filter(Column::Status.eq(status.as_str()));
        }
        if let Some(from) = filter.pickup_from {
            query = query.filter(Column::PickupDate.gte(from));
        }
        if let Some(to) = filter.pickup_to {
            query = query.filter(Column::PickupDate.lte(to));
        }

        let trips = query
            .order_by_desc(Column::PickupDate)
            .all(self.db)
            .await?
            .into_iter()
            .map(Trip::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        self.attach_names(trips).await
    }

    /// Marks a live trip completed, writing only the drop columns, status and
    /// `updated_at`.
    ///
    /// # Returns
    /// - `Ok(true)` - Trip updated
    /// - `Ok(false)` - No live trip with this id
    /// - `Err(AppError)` - Database error
    pub async fn complete(&self, id: &str, completion: TripCompletion) -> Result<bool, AppError> {
        let result = entity::prelude::Trip::update_many()
            .col_expr(Column::Status, Expr::value(TripStatus::Completed.as_str()))
            .col_expr(
                Column::DropProductLocationImage,
                Expr::value(completion.drop_product_location_image),
            )
            .col_expr(Column::DropBy, Expr::value(completion.drop_by))
            .col_expr(Column::DropDate, Expr::value(completion.drop_date))
            .col_expr(Column::UpdatedAt, Expr::value(completion.drop_date))
            .filter(Column::Id.eq(id))
            .filter(Column::Deleted.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn view_of(&self, trip: Option<Trip>) -> Result<Option<TripView>, AppError> {
        let Some(trip) = trip else {
            return Ok(None);
        };

        Ok(self.attach_names(vec![trip]).await?.pop())
    }

    /// Resolves location and transporter names for a batch of trips.
    ///
    /// Names are looked up with one query per table, including soft-deleted rows so
    /// historical trips keep their labels. Unresolvable references leave the name `None`.
    async fn attach_names(&self, trips: Vec<Trip>) -> Result<Vec<TripView>, AppError> {
        if trips.is_empty() {
            return Ok(Vec::new());
        }

        let location_ids: HashSet<String> = trips
            .iter()
            .flat_map(|trip| {
                std::iter::once(trip.pickup_location.clone()).chain(trip.drop_location.clone())
            })
            .collect();
        let transporter_ids: HashSet<String> =
            trips.iter().map(|trip| trip.transporter_id.clone()).collect();

        let location_names: HashMap<String, String> = entity::prelude::Location::find()
            .filter(entity::location::Column::Id.is_in(location_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|location| (location.id, location.name))
            .collect();
        let transporter_names: HashMap<String, String> = entity::prelude::Transporter::find()
            .filter(entity::transporter::Column::Id.is_in(transporter_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|transporter| (transporter.id, transporter.name))
            .collect();

        Ok(trips
            .into_iter()
            .map(|trip| TripView {
                pickup_location_name: location_names.get(&trip.pickup_location).cloned(),
                drop_location_name: trip
                    .drop_location
                    .as_ref()
                    .and_then(|id| location_names.get(id).cloned()),
                transporter_name: transporter_names.get(&trip.transporter_id).cloned(),
                trip,
            })
            .collect())
    }
}
