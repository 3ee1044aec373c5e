use crate::in_flight::LoadTracking;

use shell_core::{Preferences, Profile};

/// State owned by [`crate::UserProfileStore`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileState {
    pub profile: Option<Profile>,
    pub preferences: Option<Preferences>,
    /// User whose profile is currently committed
    pub loaded_user_id: Option<String>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub(crate) in_flight: u32,
}

impl LoadTracking for ProfileState {
    fn in_flight_mut(&mut self) -> &mut u32 {
        &mut self.in_flight
    }

    fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
    }

    fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }
}
