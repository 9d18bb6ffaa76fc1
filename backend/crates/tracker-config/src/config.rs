use crate::{
    AuthConfig, CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR_NAME, DatabaseConfig, LoggingConfig, ServerConfig,
};

use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for TRACKER_CONFIG_DIR env var, else use ./.tracker/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply TRACKER_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: TRACKER_CONFIG_DIR env var > ./.tracker/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR_NAME))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let config_dir = Self::config_dir()?;

        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate(&config_dir)?;
        self.logging.validate()?;

        Ok(())
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.database.path))
    }

    /// Absolute path of the log file, if file logging is configured
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        let Some(ref filename) = self.logging.file else {
            return Ok(None);
        };
        let config_dir = Self::config_dir()?;
        Ok(Some(config_dir.join(&self.logging.dir).join(filename)))
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  database: {} (max {} connections)",
            self.database.path, self.database.max_connections
        );

        let auth_type = if self.auth.jwt_secret.is_some() {
            "HS256"
        } else if self.auth.jwt_public_key_path.is_some() {
            "RS256"
        } else {
            "none"
        };

        info!(
            "  auth: {} ({})",
            if self.auth.enabled {
                "enabled"
            } else {
                "disabled"
            },
            auth_type
        );

        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        env_override("TRACKER_SERVER_HOST", &mut self.server.host);
        env_override("TRACKER_SERVER_PORT", &mut self.server.port);

        env_override("TRACKER_DATABASE_PATH", &mut self.database.path);
        env_override(
            "TRACKER_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );

        env_flag("TRACKER_AUTH_ENABLED", &mut self.auth.enabled);
        env_optional("TRACKER_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        env_optional(
            "TRACKER_AUTH_JWT_PUBLIC_KEY_PATH",
            &mut self.auth.jwt_public_key_path,
        );
        env_override("TRACKER_AUTH_DEV_USER_ID", &mut self.auth.dev_user_id);
        env_override("TRACKER_AUTH_DEV_USER_NAME", &mut self.auth.dev_user_name);

        env_override("TRACKER_LOG_LEVEL", &mut self.logging.level);
        env_flag("TRACKER_LOG_COLORED", &mut self.logging.colored);
        env_optional("TRACKER_LOG_FILE", &mut self.logging.file);
    }
}

/// Replace `target` with the parsed variable; unparsable values are ignored
fn env_override<T: FromStr>(name: &str, target: &mut T) {
    if let Some(parsed) = std::env::var(name).ok().and_then(|raw| raw.parse().ok()) {
        *target = parsed;
    }
}

/// "true" and "1" switch on, anything else switches off
fn env_flag(name: &str, target: &mut bool) {
    if let Ok(raw) = std::env::var(name) {
        *target = matches!(raw.as_str(), "true" | "1");
    }
}

fn env_optional(name: &str, target: &mut Option<String>) {
    if let Ok(raw) = std::env::var(name) {
        *target = Some(raw);
    }
}
