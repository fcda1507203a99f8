//! Trip lifecycle: creation with proof images, partial updates, delivery and export.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{catalog::CatalogRepository, trip::TripRepository},
    error::{internal::InternalError, AppError},
    model::{
        audit::Audit,
        catalog::CatalogRecord,
        resource::Resource,
        trip::{
            CompleteTripParams, CreateTripParams, NewTrip, Trip, TripCompletion, TripFilter,
            TripPatch, TripView, UpdateTripParams,
        },
    },
    service::{catalog::CatalogService, export},
    storage::{data_url::is_base64_data_url, upload_data_url, ObjectStorage},
};

pub struct TripService<'a> {
    db: &'a DatabaseConnection,
    storage: &'a dyn ObjectStorage,
}

impl<'a> TripService<'a> {
    /// Creates a new TripService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `storage` - Backend receiving uploaded proof images
    pub fn new(db: &'a DatabaseConnection, storage: &'a dyn ObjectStorage) -> Self {
        Self { db, storage }
    }

    /// Creates a pending trip picked up by the caller now.
    ///
    /// The slno is checked before any image is uploaded so a rejected request leaves no
    /// objects behind; the insert itself still enforces uniqueness against concurrent
    /// creates. A failed upload stores an empty URL.
    ///
    /// # Arguments
    /// - `params` - Validated creation parameters carrying raw image data URLs
    /// - `audit` - Caller and timestamp
    ///
    /// # Returns
    /// - `Ok(TripView)` - Created trip with names attached
    /// - `Err(AppError::Duplicate)` - A live trip already has this slno
    /// - `Err(AppError)` - Database error
    pub async fn create(
        &self,
        params: CreateTripParams,
        audit: &Audit,
    ) -> Result<TripView, AppError> {
        let repo = CatalogRepository::<Trip>::new(self.db);

        if repo.find_by_natural_key(&params.slno).await?.is_some() {
            return Err(AppError::Duplicate(Resource::Trip));
        }

        let product_bill_image = match params.product_bill_image.as_deref() {
            Some(image) => self
                .upload(image, &format!("trip_{}-product-bill-image", params.slno))
                .await
                .unwrap_or_default(),
            None => String::new(),
        };
        let pickup_product_location_image = match params.pickup_product_location_image.as_deref()
        {
            Some(image) => self
                .upload(image, &format!("trip_{}-product-location-image", params.slno))
                .await
                .unwrap_or_default(),
            None => String::new(),
        };

        let trip = Trip::create(
            Uuid::new_v4().to_string(),
            NewTrip {
                slno: params.slno,
                vehicle_no: params.vehicle_no,
                pickup_location: params.pickup_location,
                transporter_id: params.transporter_id,
                product_type: params.product_type,
                product_weight: params.product_weight,
                product_bill_image,
                pickup_product_location_image,
                drop_location: params.drop_location,
            },
            audit,
        );
        let trip = repo
            .insert(trip)
            .await
            .map_err(AppError::from_write(Resource::Trip))?;

        tracing::info!("Trip {} created by {}", trip.slno, audit.actor);

        self.reload(&trip.id).await
    }

    /// Applies a presence-tracked update to a live trip.
    ///
    /// Image fields holding a base64 data URL are uploaded and replace the stored URL;
    /// any other value, or a failed upload, keeps the stored URL.
    ///
    /// # Returns
    /// - `Ok(TripView)` - Updated trip with names attached
    /// - `Err(AppError::NotFound)` - Trip absent or soft-deleted, checked before any write
    /// - `Err(AppError::Duplicate)` - The new slno is held by another live trip, checked
    ///   before any upload
    pub async fn update(
        &self,
        id: &str,
        params: UpdateTripParams,
        audit: &Audit,
    ) -> Result<TripView, AppError> {
        let repo = CatalogRepository::<Trip>::new(self.db);
        let current = repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound(Resource::Trip))?;

        let slno = params
            .slno
            .as_deref()
            .map(str::trim)
            .filter(|slno| !slno.is_empty())
            .unwrap_or(current.slno.as_str())
            .to_string();

        // Image keys derive from the slno, so a taken slno must fail before any upload.
        if slno != current.slno {
            if let Some(holder) = repo.find_by_natural_key(&slno).await? {
                if holder.id != current.id {
                    return Err(AppError::Duplicate(Resource::Trip));
                }
            }
        }

        let product_bill_image = self
            .replace(
                params.product_bill_image.as_deref(),
                &format!("trip_{}-product-bill-image", slno),
            )
            .await;
        let pickup_product_location_image = self
            .replace(
                params.pickup_product_location_image.as_deref(),
                &format!("trip-pickup-{}-product-location-image", slno),
            )
            .await;

        let patch = TripPatch {
            slno: params.slno,
            vehicle_no: params.vehicle_no,
            status: params.status,
            pickup_location: params.pickup_location,
            transporter_id: params.transporter_id,
            product_type: params.product_type,
            product_weight: params.product_weight,
            product_bill_image,
            pickup_product_location_image,
            drop_location: params.drop_location,
        };
        let trip = repo
            .update(current.apply(patch, audit))
            .await
            .map_err(AppError::from_write(Resource::Trip))?
            .ok_or(AppError::NotFound(Resource::Trip))?;

        self.reload(&trip.id).await
    }

    /// Marks the live trip with this slno delivered by the caller now.
    ///
    /// Completing an already completed trip overwrites the drop fields. Without a new
    /// drop image the stored one is kept.
    ///
    /// # Returns
    /// - `Ok(TripView)` - Completed trip with names attached
    /// - `Err(AppError::NotFound)` - No live trip has this slno
    pub async fn complete(
        &self,
        slno: &str,
        params: CompleteTripParams,
        audit: &Audit,
    ) -> Result<TripView, AppError> {
        let current = CatalogRepository::<Trip>::new(self.db)
            .find_by_natural_key(slno)
            .await?
            .ok_or(AppError::NotFound(Resource::Trip))?;

        let drop_product_location_image = match self
            .replace(
                params.drop_product_location_image.as_deref(),
                &format!("trip-drop-{}-product-location-image", current.slno),
            )
            .await
        {
            Some(url) => Some(url),
            None => current.drop_product_location_image.clone(),
        };

        let completed = TripRepository::new(self.db)
            .complete(
                &current.id,
                TripCompletion {
                    drop_product_location_image,
                    drop_by: audit.actor.clone(),
                    drop_date: audit.at,
                },
            )
            .await?;
        if !completed {
            return Err(AppError::NotFound(Resource::Trip));
        }

        tracing::info!("Trip {} completed by {}", current.slno, audit.actor);

        self.reload(&current.id).await
    }

    /// Soft-deletes a live trip.
    pub async fn delete(&self, id: &str, audit: &Audit) -> Result<(), AppError> {
        CatalogService::<Trip>::new(self.db).delete(id, audit).await
    }

    pub async fn get_by_slno(&self, slno: &str) -> Result<TripView, AppError> {
        TripRepository::new(self.db)
            .find_view_by_slno(slno)
            .await?
            .ok_or(AppError::NotFound(Resource::Trip))
    }

    pub async fn get_by_id(&self, id: &str) -> Result<TripView, AppError> {
        TripRepository::new(self.db)
            .find_view_by_id(id)
            .await?
            .ok_or(AppError::NotFound(Resource::Trip))
    }

    /// Lists live trips matching the filter, newest pickup first.
    pub async fn list(&self, filter: &TripFilter) -> Result<Vec<TripView>, AppError> {
        TripRepository::new(self.db).list_views(filter).await
    }

    /// Renders the filtered listing as an xlsx workbook.
    pub async fn export(&self, filter: &TripFilter) -> Result<Vec<u8>, AppError> {
        let trips = self.list(filter).await?;

        export::write_xlsx(&trips)
    }

    async fn reload(&self, id: &str) -> Result<TripView, AppError> {
        TripRepository::new(self.db)
            .find_view_by_id(id)
            .await?
            .ok_or_else(|| InternalError::MissingAfterWrite("trip").into())
    }

    /// Uploads `value` when it is a base64 data URL, returning the new public URL.
    ///
    /// Returns `None` when the value should leave the stored URL untouched.
    async fn replace(&self, value: Option<&str>, name: &str) -> Option<String> {
        match value {
            Some(image) if is_base64_data_url(image) => self.upload(image, name).await,
            _ => None,
        }
    }

    async fn upload(&self, image: &str, name: &str) -> Option<String> {
        match upload_data_url(self.storage, image, name).await {
            Ok(url) => Some(url),
            Err(err) => {
                tracing::warn!("Failed to upload image {}: {}", name, err);
                None
            }
        }
    }
}
