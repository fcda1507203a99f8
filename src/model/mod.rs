//! Wire-level data transfer objects.
//!
//! Everything here is plain serde data exchanged with HTTP clients. Field names are
//! camelCase on the wire. Conversions to and from the server's domain models live next to
//! those models in `server::model`.

pub mod api;
pub mod app_version;
pub mod location;
pub mod transporter;
pub mod trip;
pub mod user;
