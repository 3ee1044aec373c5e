use crate::SessionResult;

use shell_core::{ApiResponse, AuthCredentials, AuthResponse};

use async_trait::async_trait;

/// Whatever issues tokens: the built-in mock or the REST API.
#[async_trait]
pub trait AuthBackend: Send + Sync {
    async fn login(&self, credentials: &AuthCredentials)
    -> SessionResult<ApiResponse<AuthResponse>>;

    /// Best-effort: callers log a failure and move on.
    ///
    /// `token` is the credential of the session being ended. The stored copy
    /// may already be gone by the time this runs.
    async fn logout(&self, token: Option<&str>) -> SessionResult<()>;
}
