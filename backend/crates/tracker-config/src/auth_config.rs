use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_AUTH_ENABLED, DEFAULT_DEV_USER_ID,
    DEFAULT_DEV_USER_NAME, MIN_JWT_SECRET_LENGTH,
};

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub enabled: bool,
    /// HS256 shared secret
    pub jwt_secret: Option<String>,
    /// RS256 public key PEM, relative to the config directory
    pub jwt_public_key_path: Option<String>,
    /// Session user when auth is disabled
    pub dev_user_id: String,
    pub dev_user_name: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_AUTH_ENABLED,
            jwt_secret: None,
            jwt_public_key_path: None,
            dev_user_id: String::from(DEFAULT_DEV_USER_ID),
            dev_user_name: String::from(DEFAULT_DEV_USER_NAME),
        }
    }
}

impl AuthConfig {
    pub fn validate(&self, config_dir: &Path) -> ConfigErrorResult<()> {
        if !self.enabled {
            if self.dev_user_id.trim().is_empty() {
                return Err(ConfigError::auth(
                    "auth.dev_user_id cannot be empty when auth is disabled",
                ));
            }
            return Ok(());
        }

        match (&self.jwt_secret, &self.jwt_public_key_path) {
            (None, None) => Err(ConfigError::auth(
                "auth.enabled requires auth.jwt_secret or auth.jwt_public_key_path",
            )),
            (Some(_), Some(_)) => Err(ConfigError::auth(
                "set only one of auth.jwt_secret and auth.jwt_public_key_path",
            )),
            (Some(secret), None) => {
                if secret.len() < MIN_JWT_SECRET_LENGTH {
                    return Err(ConfigError::auth(format!(
                        "auth.jwt_secret must be at least {} characters",
                        MIN_JWT_SECRET_LENGTH
                    )));
                }
                Ok(())
            }
            (None, Some(key_path)) => {
                if key_path.contains("..") || Path::new(key_path).is_absolute() {
                    return Err(ConfigError::auth(
                        "auth.jwt_public_key_path must be relative and cannot contain '..'",
                    ));
                }
                let full_path = config_dir.join(key_path);
                if !full_path.exists() {
                    return Err(ConfigError::auth(format!(
                        "auth.jwt_public_key_path not found: {}",
                        full_path.display()
                    )));
                }
                Ok(())
            }
        }
    }
}
