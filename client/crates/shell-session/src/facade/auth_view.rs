use crate::{AuthState, SessionPhase};

use shell_core::Identity;

use serde::Serialize;

/// Read model of the session with the derived fields filled in.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthView {
    pub user: Option<Identity>,
    pub token: Option<String>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub is_authenticated: bool,
    pub phase: SessionPhase,
}

impl From<&AuthState> for AuthView {
    fn from(state: &AuthState) -> Self {
        Self {
            user: state.user.clone(),
            token: state.token.clone(),
            is_loading: state.is_loading,
            error: state.error.clone(),
            is_authenticated: state.is_authenticated(),
            phase: state.phase(),
        }
    }
}
