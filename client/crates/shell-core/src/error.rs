use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid user role: {value} {location}")]
    InvalidUserRole {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid theme: {value} {location}")]
    InvalidTheme {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid profile visibility: {value} {location}")]
    InvalidProfileVisibility {
        value: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;

impl CoreError {
    /// Display text without the source location.
    pub fn message(&self) -> String {
        match self {
            Self::Validation { message, .. } => message.clone(),
            Self::InvalidUserRole { value, .. } => format!("Invalid user role: {value}"),
            Self::InvalidTheme { value, .. } => format!("Invalid theme: {value}"),
            Self::InvalidProfileVisibility { value, .. } => {
                format!("Invalid profile visibility: {value}")
            }
        }
    }
}
