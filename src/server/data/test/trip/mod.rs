use crate::server::{
    data::trip::TripRepository,
    error::AppError,
    model::trip::{TripCompletion, TripFilter, TripStatus},
};
use chrono::{Duration, Utc};
use sea_orm::EntityTrait;
use test_utils::{
    builder::TestBuilder,
    factory::{self, helpers::create_trip_with_dependencies, trip::TripFactory},
};

mod find_view;
mod list_views;
