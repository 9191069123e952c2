use secrecy::{ExposeSecret, Secret};

use crate::domain::user::UserError;

/// Plaintext password as received from the client.
///
/// The inner value is only reachable through `ExposeSecret`, so it never ends
/// up in `Debug` output or tracing fields.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl TryFrom<Secret<String>> for Password {
    type Error = UserError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        if value.expose_secret().is_empty() {
            return Err(UserError::InvalidPassword(
                "password must not be empty".to_string(),
            ));
        }
        Ok(Self(value))
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

/// Opaque salted hash of a password, in whatever format the hasher produced.
#[derive(Debug, Clone)]
pub struct PasswordHash(Secret<String>);

impl PasswordHash {
    pub fn new(hash: Secret<String>) -> Self {
        Self(hash)
    }
}

impl AsRef<Secret<String>> for PasswordHash {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}
