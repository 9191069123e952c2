use thiserror::Error;
use warden_core::{PasswordHasherError, TokenIssuerError, UserStoreError};

/// Classified outcome of a rejected register or login request.
///
/// `InvalidCredentials` covers both an unknown username and a wrong password
/// so callers cannot tell which accounts exist.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Username already exists")]
    DuplicateUsername,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Credential store unavailable: {0}")]
    StoreUnavailable(String),
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
    #[error("Token issuance failed: {0}")]
    TokenIssuanceFailed(String),
}

impl From<UserStoreError> for AuthError {
    fn from(error: UserStoreError) -> Self {
        match error {
            UserStoreError::UserAlreadyExists => AuthError::DuplicateUsername,
            UserStoreError::UserNotFound => AuthError::InvalidCredentials,
            UserStoreError::UnexpectedError(e) => AuthError::StoreUnavailable(e),
        }
    }
}

impl From<PasswordHasherError> for AuthError {
    fn from(error: PasswordHasherError) -> Self {
        AuthError::HashingFailed(error.to_string())
    }
}

impl From<TokenIssuerError> for AuthError {
    fn from(error: TokenIssuerError) -> Self {
        AuthError::TokenIssuanceFailed(error.to_string())
    }
}
