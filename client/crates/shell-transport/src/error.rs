use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors that can occur while talking to the backend
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Failed to build HTTP client: {message} {location}")]
    Build {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP request error: {message} {location}")]
    Network {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Authorization rejected (401) {location}")]
    AuthExpired { location: ErrorLocation },

    #[error("API error (status {status}): {} {location}", .message.as_deref().unwrap_or("no message"))]
    Api {
        status: u16,
        message: Option<String>,
        location: ErrorLocation,
    },

    #[error("API reported failure: {} {location}", .message.as_deref().unwrap_or("no message"))]
    Rejected {
        message: Option<String>,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },
}

impl TransportError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        TransportError::Network {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        TransportError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn api(status: u16, message: Option<String>) -> Self {
        TransportError::Api {
            status,
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn auth_expired() -> Self {
        TransportError::AuthExpired {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Message supplied by the backend, if any.
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            Self::Api { message, .. } | Self::Rejected { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// HTTP status of the failed response, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::AuthExpired { .. } => Some(401),
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Network { source, .. } if source.is_timeout())
    }
}

impl From<reqwest::Error> for TransportError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        TransportError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for TransportError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        TransportError::from_json(err)
    }
}

pub type Result<T> = std::result::Result<T, TransportError>;
