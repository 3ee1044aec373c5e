//! Identity - the authenticated user's public fields.

use crate::UserRole;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The user a session is signed in as.
///
/// Fetched at login and never mutated locally; profile edits go through the
/// profile endpoints and come back as a separate `Profile`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
