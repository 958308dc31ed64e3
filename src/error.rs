//! Error types for the conversion helpers.

/// Errors reported by the conversion functions.
///
/// Every function either fully succeeds or fails with one of these kinds;
/// failures are raised at the point of detection and nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An argument combination or value the contract rejects, such as a
    /// timezone-attached instant passed where a universal one is required.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A zone name the timezone database does not recognize.
    #[error("unknown timezone: {0}")]
    UnknownTimezone(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// True when this is the invalid-argument kind.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }

    /// True when this is the unknown-timezone kind.
    pub fn is_unknown_timezone(&self) -> bool {
        matches!(self, Error::UnknownTimezone(_))
    }
}
