use shell_core::{Preferences, Profile};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub(crate) struct PersistedProfile {
    pub profile: Option<Profile>,
    pub preferences: Option<Preferences>,
}
