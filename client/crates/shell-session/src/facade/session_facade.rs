use crate::{ActionResult, AuthSessionStore, AuthView};

use shell_core::{AuthCredentials, Identity};

use std::sync::Arc;

use log::warn;
use tokio::runtime::Handle;

/// What presentation code sees of the session.
#[derive(Clone)]
pub struct SessionFacade {
    store: Arc<AuthSessionStore>,
}

impl SessionFacade {
    pub fn new(store: Arc<AuthSessionStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<AuthSessionStore> {
        &self.store
    }

    pub fn is_authenticated(&self) -> bool {
        self.store.is_authenticated()
    }

    pub fn view(&self) -> AuthView {
        AuthView::from(&self.store.snapshot())
    }

    pub fn user(&self) -> Option<Identity> {
        self.store.user()
    }

    pub fn error(&self) -> Option<String> {
        self.store.snapshot().error
    }

    pub fn is_loading(&self) -> bool {
        self.store.snapshot().is_loading
    }

    pub async fn login(&self, email: &str, password: &str) -> ActionResult {
        let credentials = AuthCredentials::new(email, password);
        ActionResult::from_result(&self.store.login(&credentials).await)
    }

    /// Signs out without waiting: the session is cleared before this returns
    /// and the backend is told on a background task, carrying the token the
    /// session held.
    pub fn logout(&self) {
        let token = self.store.token();
        self.store.end_session();

        match Handle::try_current() {
            Ok(handle) => {
                let store = Arc::clone(&self.store);
                handle.spawn(async move { store.notify_backend_sign_out(token).await });
            }
            Err(_) => warn!("No async runtime, skipping backend sign-out"),
        }
    }

    pub fn clear_error(&self) {
        self.store.clear_error();
    }
}
