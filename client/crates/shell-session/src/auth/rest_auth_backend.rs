use crate::{AuthBackend, SessionError, SessionResult};

use shell_core::{ApiResponse, AuthCredentials, AuthResponse};
use shell_transport::{CredentialTransport, TransportError};

use std::sync::Arc;

use async_trait::async_trait;

const LOGIN_PATH: &str = "/login";
const LOGOUT_PATH: &str = "/logout";

/// Login through the backend's REST API.
pub struct RestAuthBackend {
    transport: Arc<CredentialTransport>,
}

impl RestAuthBackend {
    pub fn new(transport: Arc<CredentialTransport>) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl AuthBackend for RestAuthBackend {
    async fn login(
        &self,
        credentials: &AuthCredentials,
    ) -> SessionResult<ApiResponse<AuthResponse>> {
        self.transport
            .post(LOGIN_PATH, credentials)
            .await
            .map_err(|err| match err {
                // A rejected login is a credentials problem, not an expired session
                TransportError::AuthExpired { .. } => {
                    SessionError::invalid_credentials("Invalid credentials")
                }
                TransportError::Api {
                    status: 400 | 403,
                    ref message,
                    ..
                } => SessionError::invalid_credentials(
                    message.clone().unwrap_or_else(|| "Invalid credentials".into()),
                ),
                other => SessionError::from_transport(other, "Login failed"),
            })
    }

    async fn logout(&self, token: Option<&str>) -> SessionResult<()> {
        self.transport
            .post_no_content_as(LOGOUT_PATH, token)
            .await
            .map_err(|err| SessionError::from_transport(err, "Logout failed"))
    }
}
