use shell_storage::{AUTH_TOKEN_KEY, DurableStorage};

use std::sync::Arc;

use log::warn;

/// Read/clear access to the persisted bearer token.
pub trait CredentialSource: Send + Sync {
    fn token(&self) -> Option<String>;

    fn clear(&self);
}

/// Reads the token from durable storage under `auth_token`.
///
/// Storage failures are logged and treated as "no token": a request without a
/// credential is answered with 401 by the backend, which lands in the same
/// sign-in path.
#[derive(Clone)]
pub struct StorageCredentialSource {
    storage: Arc<dyn DurableStorage>,
}

impl StorageCredentialSource {
    pub fn new(storage: Arc<dyn DurableStorage>) -> Self {
        Self { storage }
    }
}

impl CredentialSource for StorageCredentialSource {
    fn token(&self) -> Option<String> {
        match self.storage.get(AUTH_TOKEN_KEY) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                warn!("Could not read persisted token: {e}");
                None
            }
        }
    }

    fn clear(&self) {
        if let Err(e) = self.storage.remove(AUTH_TOKEN_KEY) {
            warn!("Could not clear persisted token: {e}");
        }
    }
}
