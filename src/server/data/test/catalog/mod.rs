use crate::server::{
    data::catalog::CatalogRepository,
    error::AppError,
    model::{
        app_version::AppVersion,
        audit::Audit,
        catalog::CatalogRecord,
        location::{CreateLocationParams, Location},
        transporter::{CreateTransporterParams, Transporter, TransporterPatch},
        user::{CreateUserParams, User},
    },
};
use chrono::{Duration, Utc};
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};

mod insert;
mod latest;
mod list;
mod soft_delete;
mod update;
