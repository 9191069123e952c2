pub mod jwt_token_issuer;

pub use jwt_token_issuer::{JwtAuthConfig, JwtTokenIssuer, TokenAuthError, validate_auth_token};
