//! Preferences - per-user settings stored by the backend.

use crate::{NotificationSettings, PrivacySettings, Theme};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub id: String,
    /// Owning user
    pub user_id: String,
    pub theme: Theme,
    /// Language code, e.g. "en" or "pt-BR"
    pub language: String,
    pub notifications: NotificationSettings,
    pub privacy: PrivacySettings,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
