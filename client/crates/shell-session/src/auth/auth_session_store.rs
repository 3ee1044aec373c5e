use crate::auth::PersistedSession;
use crate::in_flight::InFlight;
use crate::{AuthBackend, AuthState, SessionPhase, SessionResult};

use shell_core::{AuthCredentials, AuthResponse, Identity};
use shell_storage::{AUTH_STORAGE_KEY, AUTH_TOKEN_KEY, DurableStorage, read_state, write_state};

use std::sync::Arc;

use log::{info, warn};
use tokio::sync::watch;

/// Owns the session: identity, token, and the login/logout lifecycle.
///
/// On success a login persists `{user, token}` under `auth-storage` and the
/// raw token under `auth_token`, which is where the transport reads it.
pub struct AuthSessionStore {
    state: watch::Sender<AuthState>,
    backend: Arc<dyn AuthBackend>,
    storage: Arc<dyn DurableStorage>,
}

impl AuthSessionStore {
    /// Creates the store, rehydrating `{user, token}` from durable storage.
    ///
    /// A snapshot that fails to decode, or that has only one of the two
    /// fields, is discarded and the store starts signed out.
    pub fn new(backend: Arc<dyn AuthBackend>, storage: Arc<dyn DurableStorage>) -> Self {
        let persisted = match read_state::<PersistedSession>(storage.as_ref(), AUTH_STORAGE_KEY) {
            Ok(Some(session)) if session.is_consistent() => session,
            Ok(Some(_)) => {
                warn!("Persisted session has a token without a user (or the reverse), ignoring");
                PersistedSession::default()
            }
            Ok(None) => PersistedSession::default(),
            Err(e) => {
                warn!("Could not rehydrate session: {e}");
                PersistedSession::default()
            }
        };

        if let Some(user) = &persisted.user {
            info!("Rehydrated session for {}", user.email);
        }

        let (state, _) = watch::channel(AuthState {
            user: persisted.user,
            token: persisted.token,
            ..AuthState::default()
        });

        Self {
            state,
            backend,
            storage,
        }
    }

    pub fn snapshot(&self) -> AuthState {
        self.state.borrow().clone()
    }

    /// Receiver that observes every commit.
    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated()
    }

    pub fn phase(&self) -> SessionPhase {
        self.state.borrow().phase()
    }

    pub fn user(&self) -> Option<Identity> {
        self.state.borrow().user.clone()
    }

    pub fn token(&self) -> Option<String> {
        self.state.borrow().token.clone()
    }

    /// Signs in and returns the identity.
    ///
    /// On failure the error message is committed, identity and token keep
    /// their prior values, and the error is returned to the caller.
    pub async fn login(&self, credentials: &AuthCredentials) -> SessionResult<Identity> {
        let op = InFlight::begin(&self.state);
        info!("Signing in {}", credentials.email);

        match self.backend.login(credentials).await {
            Ok(response) => {
                let AuthResponse { user, token } = response.into_data();
                let identity = user.clone();

                op.finish(|state| {
                    state.user = Some(user);
                    state.token = Some(token);
                    state.error = None;
                    self.persist(state);
                });

                info!("Signed in as {} ({})", identity.email, identity.role);
                Ok(identity)
            }
            Err(err) => {
                let message = err.message().to_string();
                warn!(
                    "Sign-in failed for {} ({}): {message}",
                    credentials.email,
                    err.error_code()
                );
                op.finish(|state| state.error = Some(message));
                Err(err)
            }
        }
    }

    /// Clears the session locally and in durable storage.
    ///
    /// This half of sign-out never fails and never waits on the network.
    pub fn end_session(&self) {
        self.state.send_modify(|state| {
            state.user = None;
            state.token = None;
            state.error = None;
            self.persist(state);
        });
        info!("Signed out");
    }

    /// Tells the backend that the session holding `token` is over.
    /// Failures are logged only.
    pub async fn notify_backend_sign_out(&self, token: Option<String>) {
        if let Err(e) = self.backend.logout(token.as_deref()).await {
            warn!("Backend sign-out failed ({}), ignored: {e}", e.error_code());
        }
    }

    /// Signs out: the backend is told first, with the session's token, then
    /// the session is cleared whatever the backend answered.
    pub async fn logout(&self) {
        self.notify_backend_sign_out(self.token()).await;
        self.end_session();
    }

    pub fn clear_error(&self) {
        self.state.send_if_modified(|state| state.error.take().is_some());
    }

    /// Write the persisted subset. Runs inside the commit, so the stored
    /// snapshot always matches the latest committed state.
    fn persist(&self, state: &AuthState) {
        let snapshot = PersistedSession {
            user: state.user.clone(),
            token: state.token.clone(),
        };

        let written = match (&snapshot.user, &snapshot.token) {
            (Some(_), Some(token)) => vec![
                self.storage.set(AUTH_TOKEN_KEY, token),
                write_state(self.storage.as_ref(), AUTH_STORAGE_KEY, &snapshot),
            ],
            // Each key is removed on its own so one failure cannot strand the other
            _ => vec![
                self.storage.remove(AUTH_TOKEN_KEY),
                self.storage.remove(AUTH_STORAGE_KEY),
            ],
        };

        for e in written.into_iter().filter_map(Result::err) {
            warn!("Failed to persist session: {e}");
        }
    }
}
