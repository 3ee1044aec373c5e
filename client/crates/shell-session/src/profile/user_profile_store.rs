use crate::in_flight::InFlight;
use crate::profile::PersistedProfile;
use crate::{ProfileState, SessionError, SessionResult};

use shell_core::{Preferences, PreferencesUpdate, Profile, ProfileUpdate};
use shell_storage::{DurableStorage, USER_STORAGE_KEY, read_state, write_state};
use shell_transport::CredentialTransport;

use std::future::Future;
use std::sync::Arc;

use log::{debug, info, warn};
use tokio::sync::watch;

const FETCH_PROFILE_FAILED: &str = "Failed to fetch profile";
const UPDATE_PROFILE_FAILED: &str = "Failed to update profile";
const UPDATE_PREFERENCES_FAILED: &str = "Failed to update preferences";

/// Profile and preferences fetched from the backend.
///
/// Every operation takes the user id or partial explicitly; nothing is read
/// from the session. Overlapping calls commit in completion order, and the
/// last one to finish owns `profile` and `loaded_user_id`.
pub struct UserProfileStore {
    state: watch::Sender<ProfileState>,
    transport: Arc<CredentialTransport>,
    storage: Arc<dyn DurableStorage>,
}

impl UserProfileStore {
    pub fn new(transport: Arc<CredentialTransport>, storage: Arc<dyn DurableStorage>) -> Self {
        let persisted = read_state::<PersistedProfile>(storage.as_ref(), USER_STORAGE_KEY)
            .unwrap_or_else(|e| {
                warn!("Could not rehydrate profile: {e}");
                None
            })
            .unwrap_or_default();

        let (state, _) = watch::channel(ProfileState {
            loaded_user_id: persisted.profile.as_ref().map(|p| p.id.clone()),
            profile: persisted.profile,
            preferences: persisted.preferences,
            ..ProfileState::default()
        });

        Self {
            state,
            transport,
            storage,
        }
    }

    pub fn snapshot(&self) -> ProfileState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ProfileState> {
        self.state.subscribe()
    }

    pub fn profile(&self) -> Option<Profile> {
        self.state.borrow().profile.clone()
    }

    pub fn preferences(&self) -> Option<Preferences> {
        self.state.borrow().preferences.clone()
    }

    /// `GET /users/{id}/profile`
    pub async fn fetch_profile(&self, user_id: &str) -> SessionResult<Profile> {
        let request = async {
            validate_user_id(user_id)?;
            self.transport
                .get::<Profile>(&format!("/users/{user_id}/profile"))
                .await
                .map(|response| response.into_data())
                .map_err(|e| SessionError::from_transport(e, FETCH_PROFILE_FAILED))
        };

        let profile = self
            .run(request, |state, profile: Profile| {
                state.loaded_user_id = Some(profile.id.clone());
                state.profile = Some(profile);
            })
            .await?;

        info!("Loaded profile for user {}", profile.id);
        Ok(profile)
    }

    /// `PATCH /users/profile`. The server's representation replaces the
    /// stored profile; the partial is never merged locally.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> SessionResult<Profile> {
        let request = async {
            update
                .validate()
                .map_err(|e| SessionError::validation(e.message()))?;
            self.transport
                .patch::<_, Profile>("/users/profile", update)
                .await
                .map(|response| response.into_data())
                .map_err(|e| SessionError::from_transport(e, UPDATE_PROFILE_FAILED))
        };

        self.run(request, |state, profile: Profile| {
            state.loaded_user_id = Some(profile.id.clone());
            state.profile = Some(profile);
        })
        .await
    }

    /// `PATCH /users/preferences`, same contract as [`Self::update_profile`].
    pub async fn update_preferences(
        &self,
        update: &PreferencesUpdate,
    ) -> SessionResult<Preferences> {
        let request = async {
            update
                .validate()
                .map_err(|e| SessionError::validation(e.message()))?;
            self.transport
                .patch::<_, Preferences>("/users/preferences", update)
                .await
                .map(|response| response.into_data())
                .map_err(|e| SessionError::from_transport(e, UPDATE_PREFERENCES_FAILED))
        };

        self.run(request, |state, preferences: Preferences| {
            state.preferences = Some(preferences);
        })
        .await
    }

    pub fn clear_error(&self) {
        self.state.send_if_modified(|state| state.error.take().is_some());
    }

    /// Shared shape of every operation: raise loading, await the request,
    /// then commit either the value or the error message in one step.
    async fn run<T: Clone>(
        &self,
        request: impl Future<Output = SessionResult<T>>,
        commit: impl FnOnce(&mut ProfileState, T),
    ) -> SessionResult<T> {
        let op = InFlight::begin(&self.state);

        match request.await {
            Ok(value) => {
                let result = value.clone();
                op.finish(|state| {
                    commit(state, value);
                    state.error = None;
                    self.persist(state);
                });
                Ok(result)
            }
            Err(err) => {
                let message = err.message().to_string();
                warn!("Profile operation failed ({}): {message}", err.error_code());
                op.finish(|state| state.error = Some(message));
                Err(err)
            }
        }
    }

    fn persist(&self, state: &ProfileState) {
        let snapshot = PersistedProfile {
            profile: state.profile.clone(),
            preferences: state.preferences.clone(),
        };

        match write_state(self.storage.as_ref(), USER_STORAGE_KEY, &snapshot) {
            Ok(()) => debug!("Persisted profile snapshot"),
            Err(e) => warn!("Failed to persist profile: {e}"),
        }
    }
}

/// Ids are spliced into the request path.
#[track_caller]
fn validate_user_id(user_id: &str) -> SessionResult<()> {
    let valid = !user_id.is_empty()
        && user_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if valid {
        Ok(())
    } else {
        Err(SessionError::validation(format!(
            "Invalid user id '{user_id}'"
        )))
    }
}
