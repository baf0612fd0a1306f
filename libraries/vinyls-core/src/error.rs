/// Domain error types for the vinyl catalog
use thiserror::Error;

/// Result type alias using `VinylsError`
pub type Result<T> = std::result::Result<T, VinylsError>;

/// Validation errors raised while building domain values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VinylsError {
    /// Rating outside of the accepted 1..=5 range
    #[error("Invalid rating {0}: expected a value between 1 and 5")]
    InvalidRating(i64),

    /// Collector album status the client does not know about
    #[error("Unknown collector album status: {0}")]
    UnknownStatus(String),

    /// Performer carries neither a birth date nor a creation date
    #[error("Performer {0} has neither a birth date nor a creation date")]
    MissingPerformerDate(i64),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl VinylsError {
    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
