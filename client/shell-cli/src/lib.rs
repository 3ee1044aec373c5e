//! shell - command-line host for the session stores
//!
//! Keeps the session in file storage under the config directory, so a login
//! survives across invocations.
//!
//! # Examples
//!
//! ```bash
//! shell login --email admin@example.com --password password
//! shell profile get 1 --pretty
//! shell preferences update --theme dark --email-notifications false
//! shell logout
//! ```

pub mod app;
pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod preferences_commands;
pub mod profile_commands;

#[cfg(test)]
mod tests;

pub use app::App;
pub use cli::Cli;
pub use error::{CliError, Result as CliResult};
