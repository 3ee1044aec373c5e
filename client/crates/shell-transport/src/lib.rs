//! HTTP transport that carries the session's bearer credential.
//!
//! The transport never looks at the session store. It reads the token through
//! a [`CredentialSource`] on every request and reports a rejected token to a
//! [`Navigator`].

mod credential_source;
mod credential_transport;
mod error;
mod navigator;
mod transport_settings;

pub use credential_source::{CredentialSource, StorageCredentialSource};
pub use credential_transport::CredentialTransport;
pub use error::{Result as TransportResult, TransportError};
pub use navigator::{LogNavigator, Navigator};
pub use transport_settings::TransportSettings;

#[cfg(test)]
mod tests;
