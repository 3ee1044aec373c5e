use crate::in_flight::LoadTracking;

use shell_core::Identity;

use serde::Serialize;

/// Commit-level description of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    SignedOut,
    Authenticating,
    SignedIn,
    Error,
}

/// Session state owned by [`crate::AuthSessionStore`].
///
/// `user` and `token` are only ever set or cleared together. `is_loading` and
/// `error` are transient and never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<Identity>,
    pub token: Option<String>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub(crate) in_flight: u32,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }

    /// A login in flight wins over everything else. A failed re-login while
    /// signed in keeps the session, so `SignedIn` outranks `Error`.
    pub fn phase(&self) -> SessionPhase {
        if self.is_loading {
            SessionPhase::Authenticating
        } else if self.is_authenticated() {
            SessionPhase::SignedIn
        } else if self.error.is_some() {
            SessionPhase::Error
        } else {
            SessionPhase::SignedOut
        }
    }
}

impl LoadTracking for AuthState {
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
