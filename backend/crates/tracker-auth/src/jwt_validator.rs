use crate::{AuthError, Claims, JwtAlgorithm, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

/// Clock skew tolerance in seconds
const LEEWAY_SECS: u64 = 30;

/// Verifies signed bearer tokens and returns their checked claims
pub struct JwtValidator {
    decoding_key: DecodingKey,
    validation: Validation,
    name: &'static str,
}

impl JwtValidator {
    fn new(decoding_key: DecodingKey, algorithm: Algorithm, name: &'static str) -> Self {
        // exp is checked by default
        let mut validation = Validation::new(algorithm);
        validation.validate_nbf = true;
        validation.leeway = LEEWAY_SECS;

        Self {
            decoding_key,
            validation,
            name,
        }
    }

    pub fn with_hs256(secret: &[u8]) -> Self {
        Self::new(DecodingKey::from_secret(secret), Algorithm::HS256, "HS256")
    }

    #[track_caller]
    pub fn with_rs256(public_key_pem: &str) -> AuthErrorResult<Self> {
        let decoding_key = DecodingKey::from_rsa_pem(public_key_pem.as_bytes()).map_err(|e| {
            AuthError::InvalidToken {
                message: format!("Invalid RSA public key: {}", e),
                location: ErrorLocation::from(Location::caller()),
            }
        })?;
        Ok(Self::new(decoding_key, Algorithm::RS256, "RS256"))
    }

    #[track_caller]
    pub fn from_algorithm(algorithm: JwtAlgorithm) -> AuthErrorResult<Self> {
        match algorithm {
            JwtAlgorithm::HS256 { secret } => Ok(Self::with_hs256(&secret)),
            JwtAlgorithm::RS256 { public_key_pem } => Self::with_rs256(&public_key_pem),
        }
    }

    /// Decode `token`, check its signature and time claims, then the subject
    #[track_caller]
    pub fn validate(&self, token: &str) -> AuthErrorResult<Claims> {
        let location = ErrorLocation::from(Location::caller());

        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired { location },
                _ => AuthError::JwtDecode {
                    source: e,
                    location,
                },
            })?;

        claims.validate()?;
        Ok(claims)
    }

    pub fn algorithm(&self) -> &'static str {
        self.name
    }
}
