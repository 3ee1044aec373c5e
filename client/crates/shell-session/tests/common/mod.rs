#![allow(dead_code)]

use shell_core::{ApiResponse, AuthCredentials, AuthResponse, Identity, UserRole};
use shell_session::{AuthBackend, SessionError, SessionResult};
use shell_storage::{DurableStorage, MemoryStorage, StorageError, StorageResult};
use shell_transport::{CredentialTransport, Navigator, StorageCredentialSource, TransportSettings};

use std::collections::HashMap;
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use serde_json::{Value, json};
use tokio::sync::{Notify, Semaphore};

pub const TIMESTAMP: &str = "2024-01-01T00:00:00Z";

pub fn identity(id: &str, email: &str) -> Identity {
    let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    Identity {
        id: id.into(),
        email: email.into(),
        name: "Test User".into(),
        role: UserRole::User,
        avatar: None,
        created_at: at,
        updated_at: at,
    }
}

pub fn profile_json(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "email": format!("{id}@example.com"),
        "name": name,
        "bio": "Hello",
        "createdAt": TIMESTAMP,
        "updatedAt": TIMESTAMP
    })
}

pub fn preferences_json(user_id: &str, theme: &str) -> Value {
    json!({
        "id": format!("prefs-{user_id}"),
        "userId": user_id,
        "theme": theme,
        "language": "en",
        "notifications": { "email": true, "push": true, "sms": false },
        "privacy": { "profileVisibility": "public", "showEmail": false, "showLocation": true },
        "createdAt": TIMESTAMP,
        "updatedAt": TIMESTAMP
    })
}

pub fn envelope(data: Value) -> Value {
    json!({ "data": data, "success": true })
}

#[derive(Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn routes(&self) -> Vec<String> {
        self.routes.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: &str) {
        self.routes.lock().unwrap().push(route.to_string());
    }
}

pub fn transport(
    base_url: &str,
    storage: Arc<MemoryStorage>,
    navigator: Arc<RecordingNavigator>,
) -> Arc<CredentialTransport> {
    let settings = TransportSettings {
        timeout: Duration::from_secs(5),
        ..TransportSettings::new(base_url)
    };
    Arc::new(
        CredentialTransport::new(
            settings,
            Arc::new(StorageCredentialSource::new(storage)),
            navigator,
        )
        .unwrap(),
    )
}

/// Backend whose logins each block until the test releases that email.
pub struct GatedBackend {
    entered: Semaphore,
    gates: Mutex<HashMap<String, Arc<Notify>>>,
}

impl GatedBackend {
    pub fn new() -> Self {
        Self {
            entered: Semaphore::new(0),
            gates: Mutex::default(),
        }
    }

    fn gate(&self, email: &str) -> Arc<Notify> {
        self.gates
            .lock()
            .unwrap()
            .entry(email.to_string())
            .or_default()
            .clone()
    }

    /// Wait until `count` logins are parked at their gates.
    pub async fn wait_entered(&self, count: u32) {
        self.entered.acquire_many(count).await.unwrap().forget();
    }

    pub fn release(&self, email: &str) {
        self.gate(email).notify_one();
    }

    pub fn token_for(email: &str) -> String {
        format!("token_for_{email}")
    }
}

#[async_trait]
impl AuthBackend for GatedBackend {
    async fn login(
        &self,
        credentials: &AuthCredentials,
    ) -> SessionResult<ApiResponse<AuthResponse>> {
        let gate = self.gate(&credentials.email);
        self.entered.add_permits(1);
        gate.notified().await;

        Ok(ApiResponse::ok(
            AuthResponse {
                user: identity("7", &credentials.email),
                token: Self::token_for(&credentials.email),
            },
            "Login successful",
        ))
    }

    async fn logout(&self, _token: Option<&str>) -> SessionResult<()> {
        Ok(())
    }
}

/// Backend whose logout always fails; remembers the token each call carried.
#[derive(Default)]
pub struct FailingLogoutBackend {
    tokens: Mutex<Vec<Option<String>>>,
}

impl FailingLogoutBackend {
    pub fn logout_calls(&self) -> usize {
        self.tokens.lock().unwrap().len()
    }

    pub fn logout_tokens(&self) -> Vec<Option<String>> {
        self.tokens.lock().unwrap().clone()
    }
}

#[async_trait]
impl AuthBackend for FailingLogoutBackend {
    async fn login(
        &self,
        credentials: &AuthCredentials,
    ) -> SessionResult<ApiResponse<AuthResponse>> {
        Ok(ApiResponse::ok(
            AuthResponse {
                user: identity("3", &credentials.email),
                token: "token_3".into(),
            },
            "Login successful",
        ))
    }

    async fn logout(&self, token: Option<&str>) -> SessionResult<()> {
        self.tokens.lock().unwrap().push(token.map(String::from));
        Err(SessionError::unknown("backend unavailable"))
    }
}

/// Memory storage whose `remove` fails for one key.
pub struct StickyKeyStorage {
    inner: MemoryStorage,
    sticky: &'static str,
}

impl StickyKeyStorage {
    pub fn new(sticky: &'static str) -> Self {
        Self {
            inner: MemoryStorage::new(),
            sticky,
        }
    }
}

impl DurableStorage for StickyKeyStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        if key == self.sticky {
            return Err(StorageError::file_write(
                PathBuf::from(key),
                io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
            ));
        }
        self.inner.remove(key)
    }
}
