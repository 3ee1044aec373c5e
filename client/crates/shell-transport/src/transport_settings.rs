use shell_config::{ApiConfig, DEFAULT_SIGN_IN_ROUTE, DEFAULT_TIMEOUT_SECS};

use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportSettings {
    pub base_url: String,
    pub timeout: Duration,
    pub sign_in_route: String,
}

impl TransportSettings {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            sign_in_route: String::from(DEFAULT_SIGN_IN_ROUTE),
        }
    }
}

impl From<&ApiConfig> for TransportSettings {
    fn from(config: &ApiConfig) -> Self {
        Self {
            timeout: config.timeout(),
            sign_in_route: config.sign_in_route.clone(),
            ..Self::new(&config.base_url)
        }
    }
}
