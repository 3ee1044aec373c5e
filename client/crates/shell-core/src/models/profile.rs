//! Profile - the backend's public profile document for a user.

use crate::SocialLinks;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Profile as returned by the backend.
///
/// The server representation is authoritative: updates replace the whole
/// value with whatever the server returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_links: Option<SocialLinks>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
