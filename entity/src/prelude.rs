pub use super::app_version::Entity as AppVersion;
pub use super::location::Entity as Location;
pub use super::transporter::Entity as Transporter;
pub use super::trip::Entity as Trip;
pub use super::user::Entity as User;
