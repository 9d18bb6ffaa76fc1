mod auth_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod server_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;

/// Environment variable naming the config directory
pub const CONFIG_DIR_ENV: &str = "TRACKER_CONFIG_DIR";
const DEFAULT_CONFIG_DIR_NAME: &str = ".tracker";
const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATABASE_FILENAME: &str = "data.db";
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;
const MIN_DB_MAX_CONNECTIONS: u32 = 1;
const MAX_DB_MAX_CONNECTIONS: u32 = 100;

const DEFAULT_AUTH_ENABLED: bool = false;
const DEFAULT_DEV_USER_ID: &str = "dev-user";
const DEFAULT_DEV_USER_NAME: &str = "Developer";
const MIN_JWT_SECRET_LENGTH: usize = 32;

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

#[cfg(test)]
mod tests;
