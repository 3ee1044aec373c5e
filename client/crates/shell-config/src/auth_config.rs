use crate::ConfigError;

use std::str::FromStr;

use serde::Deserialize;

/// Which login backend the session store is wired to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AuthBackendKind {
    /// Built-in accounts, no network
    #[default]
    Mock,
    /// `POST /login` against the configured API
    Rest,
}

impl FromStr for AuthBackendKind {
    type Err = ConfigError;

    #[track_caller]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mock" => Ok(Self::Mock),
            "rest" => Ok(Self::Rest),
            _ => Err(ConfigError::config(format!(
                "auth.backend must be mock or rest, got {s}"
            ))),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AuthConfig {
    pub backend: AuthBackendKind,
}
