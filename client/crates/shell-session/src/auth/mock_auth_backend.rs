use crate::{AuthBackend, SessionError, SessionResult};

use shell_core::{ApiResponse, AuthCredentials, AuthResponse, Identity, UserRole};
use shell_storage::{AUTH_TOKEN_KEY, DurableStorage};

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use log::info;

/// The one password every mock account accepts
pub const MOCK_PASSWORD: &str = "password";

/// Offline login against two built-in accounts.
pub struct MockAuthBackend {
    users: Vec<Identity>,
    storage: Arc<dyn DurableStorage>,
}

impl MockAuthBackend {
    pub fn new(storage: Arc<dyn DurableStorage>) -> Self {
        let now = Utc::now();
        let users = vec![
            Identity {
                id: "1".to_string(),
                email: "admin@example.com".to_string(),
                name: "Admin User".to_string(),
                role: UserRole::Admin,
                avatar: Some("https://i.pravatar.cc/150?img=1".to_string()),
                created_at: now,
                updated_at: now,
            },
            Identity {
                id: "2".to_string(),
                email: "user@example.com".to_string(),
                name: "John Doe".to_string(),
                role: UserRole::User,
                avatar: Some("https://i.pravatar.cc/150?img=2".to_string()),
                created_at: now,
                updated_at: now,
            },
        ];

        Self { users, storage }
    }
}

#[async_trait]
impl AuthBackend for MockAuthBackend {
    async fn login(
        &self,
        credentials: &AuthCredentials,
    ) -> SessionResult<ApiResponse<AuthResponse>> {
        let user = self
            .users
            .iter()
            .find(|u| u.email == credentials.email)
            .filter(|_| credentials.password == MOCK_PASSWORD)
            .ok_or_else(|| SessionError::invalid_credentials("Invalid credentials"))?;

        let token = format!("mock_token_{}_{}", user.id, Utc::now().timestamp_millis());
        info!("Mock login accepted for {}", user.email);

        Ok(ApiResponse::ok(
            AuthResponse {
                user: user.clone(),
                token,
            },
            "Login successful",
        ))
    }

    async fn logout(&self, _token: Option<&str>) -> SessionResult<()> {
        self.storage
            .remove(AUTH_TOKEN_KEY)
            .map_err(|e| SessionError::unknown(e.to_string()))
    }
}
