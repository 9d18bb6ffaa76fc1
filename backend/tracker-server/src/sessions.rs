use crate::error::{Result as ServerErrorResult, ServerError};

use tracker_auth::{JwtAlgorithm, JwtValidator, Session, SessionResolver};
use tracker_config::{Config, ConfigError};

use log::{info, warn};

/// Build the session resolver the configuration asks for
pub fn build_session_resolver(config: &Config) -> ServerErrorResult<SessionResolver> {
    let auth = &config.auth;

    if !auth.enabled {
        warn!("Authentication DISABLED - running in development mode");
        return Ok(SessionResolver::Disabled(Session::new(
            auth.dev_user_id.clone(),
            Some(auth.dev_user_name.clone()),
            None,
        )));
    }

    let algorithm = if let Some(ref secret) = auth.jwt_secret {
        JwtAlgorithm::HS256 {
            secret: secret.as_bytes().to_vec(),
        }
    } else if let Some(ref key_path) = auth.jwt_public_key_path {
        let full_path = Config::config_dir()?.join(key_path);
        let public_key_pem =
            std::fs::read_to_string(&full_path).map_err(|e| ServerError::JwtKeyFile {
                path: full_path.display().to_string(),
                source: e,
            })?;
        JwtAlgorithm::RS256 { public_key_pem }
    } else {
        return Err(ConfigError::auth(
            "auth.enabled requires auth.jwt_secret or auth.jwt_public_key_path",
        )
        .into());
    };

    info!("JWT: {} authentication enabled", algorithm.name());
    let validator = JwtValidator::from_algorithm(algorithm)?;

    Ok(SessionResolver::Jwt(validator))
}
