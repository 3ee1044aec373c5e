mod auth_backend;
mod auth_session_store;
mod auth_state;
mod mock_auth_backend;
mod persisted_session;
mod rest_auth_backend;

pub use auth_backend::AuthBackend;
pub use auth_session_store::AuthSessionStore;
pub use auth_state::{AuthState, SessionPhase};
pub use mock_auth_backend::{MOCK_PASSWORD, MockAuthBackend};
pub use rest_auth_backend::RestAuthBackend;

pub(crate) use persisted_session::PersistedSession;
