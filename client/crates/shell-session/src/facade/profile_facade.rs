use crate::{ActionResult, ProfileState, UserProfileStore};

use shell_core::{Preferences, PreferencesUpdate, Profile, ProfileUpdate};

use std::sync::Arc;

#[derive(Clone)]
pub struct ProfileFacade {
    store: Arc<UserProfileStore>,
}

impl ProfileFacade {
    pub fn new(store: Arc<UserProfileStore>) -> Self {
        Self { store }
    }

    pub fn state(&self) -> ProfileState {
        self.store.snapshot()
    }

    pub fn profile(&self) -> Option<Profile> {
        self.store.profile()
    }

    pub fn preferences(&self) -> Option<Preferences> {
        self.store.preferences()
    }

    pub async fn load(&self, user_id: &str) -> ActionResult {
        ActionResult::from_result(&self.store.fetch_profile(user_id).await)
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> ActionResult {
        ActionResult::from_result(&self.store.update_profile(update).await)
    }

    pub async fn update_preferences(&self, update: &PreferencesUpdate) -> ActionResult {
        ActionResult::from_result(&self.store.update_preferences(update).await)
    }

    pub fn clear_error(&self) {
        self.store.clear_error();
    }
}
