use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Stored trip status is neither `pending` nor `completed`.
    ///
    /// Only reachable when rows are written outside this service. Results in a
    /// 500 response carrying the operation's error code.
    #[error("Unknown trip status '{0}' stored in database")]
    UnknownTripStatus(String),

    /// A row written moments ago could not be read back.
    #[error("{0} disappeared after being written")]
    MissingAfterWrite(&'static str),
}
