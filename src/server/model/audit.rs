use chrono::{DateTime, Utc};

/// Actor recorded when a request carries no authenticated caller.
pub const ANONYMOUS_ACTOR: &str = "-1";

/// Who is writing, and when.
///
/// Captured once per request so every audit column touched by one operation carries the
/// same timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct Audit {
    pub actor: String,
    pub at: DateTime<Utc>,
}

impl Audit {
    /// Creates an audit stamp for `actor` at the current time.
    pub fn now(actor: impl Into<String>) -> Self {
        Self {
            actor: actor.into(),
            at: Utc::now(),
        }
    }

    /// Creates an audit stamp for an unauthenticated request.
    pub fn anonymous() -> Self {
        Self::now(ANONYMOUS_ACTOR)
    }
}
