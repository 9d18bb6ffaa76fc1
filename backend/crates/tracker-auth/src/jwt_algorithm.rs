/// Key material for verifying bearer tokens
#[derive(Debug, Clone)]
pub enum JwtAlgorithm {
    /// Shared secret, HMAC with SHA-256
    HS256 { secret: Vec<u8> },
    /// PEM-encoded RSA public key, RSA with SHA-256
    RS256 { public_key_pem: String },
}

impl JwtAlgorithm {
    pub fn name(&self) -> &'static str {
        match self {
            Self::HS256 { .. } => "HS256",
            Self::RS256 { .. } => "RS256",
        }
    }
}
