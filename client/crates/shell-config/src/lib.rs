mod api_config;
mod auth_config;
mod config;
mod environment;
mod error;
mod log_level;
mod logging_config;
mod storage_config;

pub use api_config::ApiConfig;
pub use auth_config::{AuthBackendKind, AuthConfig};
pub use config::Config;
pub use environment::Environment;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use storage_config::StorageConfig;

pub const CONFIG_DIR_ENV: &str = "SHELL_CONFIG_DIR";
pub const DEFAULT_CONFIG_DIR: &str = ".shell";
pub const CONFIG_FILENAME: &str = "config.toml";

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3001/api";
pub const DEFAULT_SIGN_IN_ROUTE: &str = "/login";

// Request timeout constraints
pub const MIN_TIMEOUT_SECS: u64 = 1;
pub const MAX_TIMEOUT_SECS: u64 = 300;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const DEFAULT_STORAGE_DIR: &str = "storage";

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;

#[cfg(test)]
mod tests;
