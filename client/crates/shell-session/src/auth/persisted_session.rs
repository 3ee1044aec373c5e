use shell_core::Identity;

use serde::{Deserialize, Serialize};

/// The part of the session that survives a restart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub(crate) struct PersistedSession {
    pub user: Option<Identity>,
    pub token: Option<String>,
}

impl PersistedSession {
    /// Both present or both absent.
    pub fn is_consistent(&self) -> bool {
        self.user.is_some() == self.token.is_some()
    }
}
