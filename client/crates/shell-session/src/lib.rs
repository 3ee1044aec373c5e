//! Client-side session state: who is signed in, their profile, and the
//! facade presentation code talks to.
//!
//! Both stores own their state behind a `tokio::sync::watch` channel. Every
//! commit replaces fields atomically and, where the committed fields are
//! persisted, writes the snapshot to durable storage while the channel lock is
//! held, so the stored snapshot always matches the last commit. Concurrent
//! operations settle in completion order: the last one to finish wins.

pub mod auth;
pub mod error;
pub mod facade;
pub mod profile;

mod in_flight;

pub use auth::{
    AuthBackend, AuthSessionStore, AuthState, MOCK_PASSWORD, MockAuthBackend, RestAuthBackend,
    SessionPhase,
};
pub use error::{Result as SessionResult, SessionError};
pub use facade::{ActionResult, AuthView, ProfileFacade, SessionFacade};
pub use profile::{ProfileState, UserProfileStore};

#[cfg(test)]
mod tests;
