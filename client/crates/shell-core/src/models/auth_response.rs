use crate::Identity;

use serde::{Deserialize, Serialize};

/// Payload of a successful login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: Identity,
    pub token: String,
}
