use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    password::{Password, PasswordHash},
    session_token::SessionToken,
    username::Username,
};

#[derive(Debug, Error)]
pub enum PasswordHasherError {
    #[error("Failed to hash password: {0}")]
    HashingFailed(String),
    #[error("Stored password hash is malformed: {0}")]
    MalformedHash(String),
}

/// One-way salted password hashing.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: Password) -> Result<PasswordHash, PasswordHasherError>;

    /// Returns `Ok(false)` on a mismatch; errors are reserved for hashes that
    /// cannot be checked at all.
    async fn verify(
        &self,
        password: Password,
        expected_hash: PasswordHash,
    ) -> Result<bool, PasswordHasherError>;
}

#[derive(Debug, Error)]
pub enum TokenIssuerError {
    #[error("Invalid token lifetime")]
    InvalidLifetime,
    #[error("Failed to sign token: {0}")]
    SigningFailed(String),
}

/// Signs session tokens for authenticated users.
pub trait TokenIssuer: Send + Sync {
    fn issue(&self, username: &Username) -> Result<SessionToken, TokenIssuerError>;
}
