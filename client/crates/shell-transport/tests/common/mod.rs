use shell_storage::{AUTH_TOKEN_KEY, DurableStorage, MemoryStorage};
use shell_transport::{CredentialTransport, Navigator, StorageCredentialSource, TransportSettings};

use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Navigator that remembers every route it was sent to
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

pub struct Harness {
    pub storage: Arc<MemoryStorage>,
    pub navigator: Arc<RecordingNavigator>,
    pub transport: CredentialTransport,
}

pub fn harness(base_url: &str, token: Option<&str>) -> Harness {
    let storage = Arc::new(MemoryStorage::new());
    if let Some(token) = token {
        storage.set(AUTH_TOKEN_KEY, token).unwrap();
    }

    let navigator = Arc::new(RecordingNavigator::default());
    let settings = TransportSettings {
        timeout: Duration::from_secs(2),
        ..TransportSettings::new(base_url)
    };
    let transport = CredentialTransport::new(
        settings,
        Arc::new(StorageCredentialSource::new(storage.clone())),
        navigator.clone(),
    )
    .unwrap();

    Harness {
        storage,
        navigator,
        transport,
    }
}
