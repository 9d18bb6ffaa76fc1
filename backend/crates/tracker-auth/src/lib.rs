pub mod claims;
pub mod error;
pub mod jwt_algorithm;
pub mod jwt_validator;
pub mod session;
pub mod session_resolver;

pub use claims::Claims;
pub use error::{AuthError, Result};
pub use jwt_algorithm::JwtAlgorithm;
pub use jwt_validator::JwtValidator;
pub use session::Session;
pub use session_resolver::{SessionResolver, bearer_token};
