use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use secrecy::{ExposeSecret, Secret};
use thiserror::Error;
use warden_core::{Claims, SessionToken, TokenIssuer, TokenIssuerError, Username};

#[derive(Clone)]
pub struct JwtAuthConfig {
    pub jwt_secret: Secret<String>,
    pub token_ttl_in_seconds: i64,
}

impl JwtAuthConfig {
    pub fn as_bytes(&self) -> &[u8] {
        self.jwt_secret.expose_secret().as_bytes()
    }
}

/// Issues HS256-signed JWTs whose subject is the username.
#[derive(Clone)]
pub struct JwtTokenIssuer {
    config: JwtAuthConfig,
}

impl JwtTokenIssuer {
    pub fn new(config: JwtAuthConfig) -> Self {
        Self { config }
    }
}

impl TokenIssuer for JwtTokenIssuer {
    #[tracing::instrument(name = "JwtTokenIssuer::issue", skip_all)]
    fn issue(&self, username: &Username) -> Result<SessionToken, TokenIssuerError> {
        generate_auth_token(
            username,
            self.config.token_ttl_in_seconds,
            self.config.as_bytes(),
        )
        .map(SessionToken::new)
    }
}

#[derive(Debug, Error)]
pub enum TokenAuthError {
    #[error("Invalid token")]
    InvalidToken,
    #[error("Token error: {0}")]
    TokenError(jsonwebtoken::errors::Error),
}

// Create JWT auth token
pub fn generate_auth_token(
    username: &Username,
    token_ttl_seconds: i64,
    secret: &[u8],
) -> Result<String, TokenIssuerError> {
    let delta =
        chrono::Duration::try_seconds(token_ttl_seconds).ok_or(TokenIssuerError::InvalidLifetime)?;

    let issued_at = Utc::now();
    let exp = issued_at
        .checked_add_signed(delta)
        .ok_or(TokenIssuerError::InvalidLifetime)?
        .timestamp();

    let claims = Claims {
        sub: username.as_str().to_owned(),
        iat: issued_at.timestamp(),
        exp,
    };

    encode(&Header::default(), &claims, &EncodingKey::from_secret(secret))
        .map_err(|e| TokenIssuerError::SigningFailed(e.to_string()))
}

// Check the signature and expiry of a token and return its claims
pub fn validate_auth_token(token: &str, config: &JwtAuthConfig) -> Result<Claims, TokenAuthError> {
    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(TokenAuthError::TokenError)?;

    if claims.sub.is_empty() {
        return Err(TokenAuthError::InvalidToken);
    }

    Ok(claims)
}
