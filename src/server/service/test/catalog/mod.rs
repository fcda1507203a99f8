use crate::server::{
    error::AppError,
    model::{
        app_version::{AppVersion, CreateAppVersionParams},
        audit::Audit,
        location::{Location, LocationPatch},
        resource::Resource,
        transporter::{CreateTransporterParams, Transporter, TransporterPatch},
        user::{CreateUserParams, User, UserPatch},
    },
    service::catalog::CatalogService,
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get;
mod latest;
mod update;
