use crate::{
    CoreError, NotificationSettings, PrivacySettings, Result as CoreErrorResult, Theme,
};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Partial preferences sent with `PATCH /users/preferences`.
///
/// The partial is shallow: `notifications` and `privacy` replace the stored
/// objects whole when present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notifications: Option<NotificationSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub privacy: Option<PrivacySettings>,
}

impl PreferencesUpdate {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        if self.is_empty() {
            return Err(CoreError::Validation {
                message: "preferences update contains no fields".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if self
            .language
            .as_deref()
            .is_some_and(|language| language.trim().is_empty())
        {
            return Err(CoreError::Validation {
                message: "language must not be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(())
    }
}
