/// Record types exposed over the API.
///
/// Drives error codes and messages so every resource reports not-found, duplicate and
/// operation failures the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Trip,
    Transporter,
    User,
    Location,
    AppVersion,
}

impl Resource {
    /// Capitalised name used in messages, e.g. `"App version"`.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Trip => "Trip",
            Self::Transporter => "Transporter",
            Self::User => "User",
            Self::Location => "Location",
            Self::AppVersion => "App version",
        }
    }

    /// Lowercase name used inside sentences.
    pub fn noun(&self) -> &'static str {
        match self {
            Self::Trip => "trip",
            Self::Transporter => "transporter",
            Self::User => "user",
            Self::Location => "location",
            Self::AppVersion => "app version",
        }
    }

    /// Upper snake case name used to build error codes.
    pub fn code_name(&self) -> &'static str {
        match self {
            Self::Trip => "TRIP",
            Self::Transporter => "TRANSPORTER",
            Self::User => "USER",
            Self::Location => "LOCATION",
            Self::AppVersion => "APP_VERSION",
        }
    }

    pub fn not_found_code(&self) -> String {
        format!("{}_NOT_FOUND", self.code_name())
    }

    /// Error code for a natural-key collision.
    pub fn duplicate_code(&self) -> &'static str {
        match self {
            Self::Trip => "DUPLICATE_SLNO",
            Self::Transporter => "DUPLICATE_NAME",
            Self::User => "DUPLICATE_MOBILE_NUMBER",
            Self::Location => "DUPLICATE_LOCATION_NAME",
            Self::AppVersion => "DUPLICATE_VERSION",
        }
    }

    pub fn duplicate_message(&self) -> &'static str {
        match self {
            Self::Trip => "Trip with this SLNo already exists",
            Self::Transporter => "Transporter with this name already exists",
            Self::User => "User with this mobile number already exists",
            Self::Location => "Location with this name already exists",
            Self::AppVersion => "App version already exists",
        }
    }
}
