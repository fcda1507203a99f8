use std::{net::SocketAddr, path::PathBuf, str::FromStr};

use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_MAX_CONNECTIONS: u32 = 100;
const DEFAULT_STORAGE_DIR: &str = "./uploads";
const DEFAULT_STORAGE_PUBLIC_URL: &str = "http://localhost:8080/uploads/";

pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,

    /// Shared HS256 secret used to verify bearer tokens.
    pub jwt_secret: String,

    pub bind_address: SocketAddr,

    pub storage_dir: PathBuf,
    /// Base URL uploaded objects are served under, always ending with `/`.
    pub storage_public_url: Url,

    /// Single origin allowed by CORS; any origin when unset.
    pub cors_allowed_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable, or `None` when unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and parseable
    /// - `Err(AppError::ConfigErr)` - A required variable is missing or a value is invalid
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let required = |name: &str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let mut public_url =
            lookup("STORAGE_PUBLIC_URL").unwrap_or_else(|| DEFAULT_STORAGE_PUBLIC_URL.to_string());
        if !public_url.ends_with('/') {
            public_url.push('/');
        }

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            database_max_connections: parse_or(
                "DATABASE_MAX_CONNECTIONS",
                lookup("DATABASE_MAX_CONNECTIONS"),
                DEFAULT_MAX_CONNECTIONS,
            )?,
            jwt_secret: required("JWT_SECRET")?,
            bind_address: parse_or(
                "BIND_ADDRESS",
                lookup("BIND_ADDRESS"),
                SocketAddr::from_str(DEFAULT_BIND_ADDRESS).map_err(|e| invalid("BIND_ADDRESS", e))?,
            )?,
            storage_dir: lookup("STORAGE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STORAGE_DIR)),
            storage_public_url: Url::parse(&public_url)
                .map_err(|e| invalid("STORAGE_PUBLIC_URL", e))?,
            cors_allowed_origin: lookup("CORS_ALLOWED_ORIGIN").filter(|value| !value.is_empty()),
        })
    }
}

fn parse_or<T>(name: &str, value: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match value {
        Some(value) => value.parse().map_err(|e| invalid(name, e)),
        None => Ok(default),
    }
}

fn invalid(name: &str, reason: impl std::fmt::Display) -> ConfigError {
    ConfigError::InvalidEnvVar {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}
