//! Error types for the Vinyls client.

use thiserror::Error;
use vinyls_core::VinylsError;

/// Failure branch of every service adapter call.
///
/// The variants only exist for logging and tests; screens show the
/// `Display` text and nothing else.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Server answered 2xx without a body
    #[error("Empty response from server")]
    EmptyResponse,

    /// Server answered with a non-2xx status
    #[error("Error {status}: {message}{}", body_suffix(.body))]
    Http {
        status: u16,
        message: String,
        /// Raw error body, only kept for write calls
        body: Option<String>,
    },

    /// Transport or serialization fault
    #[error("Connection error: {0}")]
    Connection(String),

    /// Response decoded but did not describe a valid domain value
    #[error("Invalid data from server: {0}")]
    InvalidData(String),
}

fn body_suffix(body: &Option<String>) -> String {
    match body {
        Some(body) if !body.trim().is_empty() => format!(" - {}", body.trim()),
        _ => String::new(),
    }
}

impl ServiceError {
    /// HTTP status code, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<VinylsError> for ServiceError {
    fn from(err: VinylsError) -> Self {
        Self::InvalidData(err.to_string())
    }
}

impl From<HttpError> for ServiceError {
    fn from(err: HttpError) -> Self {
        Self::Connection(err.to_string())
    }
}

/// Result type for service adapter and repository calls.
pub type ServiceResult<T> = std::result::Result<T, ServiceError>;

/// Faults raised below the adapters, before any status code is inspected.
#[derive(Error, Debug)]
pub enum HttpError {
    /// Request could not be sent or the response could not be read
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// Success body was not the JSON we expected
    #[error("Failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Errors building a client from its configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Invalid base URL
    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),

    /// HTTP client could not be built
    #[error("Failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}
