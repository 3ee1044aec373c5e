use shell_transport::TransportError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Failures surfaced by store operations.
///
/// `message` is the human-readable text committed to the store's `error`
/// field: the backend's own message when it sent one, otherwise the
/// operation's default.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Invalid credentials: {message} {location}")]
    InvalidCredentials {
        message: String,
        location: ErrorLocation,
    },

    #[error("Network failure: {message} {location}")]
    NetworkFailure {
        message: String,
        location: ErrorLocation,
        #[source]
        source: Option<TransportError>,
    },

    #[error("Authorization expired: {message} {location}")]
    AuthExpired {
        message: String,
        location: ErrorLocation,
        #[source]
        source: Option<TransportError>,
    },

    #[error("Validation failure: {message} {location}")]
    ValidationFailure {
        message: String,
        location: ErrorLocation,
        #[source]
        source: Option<TransportError>,
    },

    #[error("Unknown failure: {message} {location}")]
    UnknownFailure {
        message: String,
        location: ErrorLocation,
        #[source]
        source: Option<TransportError>,
    },
}

impl SessionError {
    #[track_caller]
    pub fn invalid_credentials(message: impl Into<String>) -> Self {
        Self::InvalidCredentials {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationFailure {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
            source: None,
        }
    }

    #[track_caller]
    pub fn unknown(message: impl Into<String>) -> Self {
        Self::UnknownFailure {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
            source: None,
        }
    }

    /// Classify a transport failure, preferring the backend's message over
    /// `default_message`.
    #[track_caller]
    pub fn from_transport(err: TransportError, default_message: &str) -> Self {
        let location = ErrorLocation::from(Location::caller());
        let message = err
            .backend_message()
            .map(String::from)
            .unwrap_or_else(|| default_message.to_string());

        match err {
            TransportError::Network { .. } => Self::NetworkFailure {
                message,
                location,
                source: Some(err),
            },
            TransportError::AuthExpired { .. } => Self::AuthExpired {
                message,
                location,
                source: Some(err),
            },
            TransportError::Api {
                status,
                message: Some(_),
                ..
            } if (400..500).contains(&status) => Self::ValidationFailure {
                message,
                location,
                source: Some(err),
            },
            TransportError::Rejected {
                message: Some(_), ..
            } => Self::ValidationFailure {
                message,
                location,
                source: Some(err),
            },
            _ => Self::UnknownFailure {
                message,
                location,
                source: Some(err),
            },
        }
    }

    /// Text shown to the user; never includes the source location.
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidCredentials { message, .. }
            | Self::NetworkFailure { message, .. }
            | Self::AuthExpired { message, .. }
            | Self::ValidationFailure { message, .. }
            | Self::UnknownFailure { message, .. } => message,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCredentials { .. } => "INVALID_CREDENTIALS",
            Self::NetworkFailure { .. } => "NETWORK_FAILURE",
            Self::AuthExpired { .. } => "AUTH_EXPIRED",
            Self::ValidationFailure { .. } => "VALIDATION_FAILURE",
            Self::UnknownFailure { .. } => "UNKNOWN_FAILURE",
        }
    }
}

pub type Result<T> = std::result::Result<T, SessionError>;
