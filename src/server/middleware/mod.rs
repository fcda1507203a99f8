//! Request extractors and middleware.
//!
//! - `auth` - bearer-token caller extraction
//! - `validation` - validated JSON body extractors
//! - `exchange` - request/response observation

pub mod auth;
pub mod exchange;
pub mod validation;
