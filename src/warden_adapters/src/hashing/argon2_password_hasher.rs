use argon2::{
    Algorithm, Argon2, Params, PasswordVerifier, Version,
    password_hash::{self, PasswordHasher as _, SaltString, rand_core},
};
use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};
use warden_core::{Password, PasswordHash, PasswordHasher, PasswordHasherError};

/// Argon2id hasher producing PHC strings with a random per-password salt.
///
/// Hashing is CPU bound, so both operations run on the blocking pool and
/// re-enter the caller's span there.
#[derive(Clone)]
pub struct Argon2PasswordHasher {
    params: Params,
}

impl Argon2PasswordHasher {
    pub fn new(params: Params) -> Self {
        Self { params }
    }

    fn argon2(params: Params) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
    }
}

impl Default for Argon2PasswordHasher {
    fn default() -> Self {
        // 15 MiB, 2 passes, 1 lane
        let params = Params::new(15000, 2, 1, None).unwrap_or_default();
        Self::new(params)
    }
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    #[tracing::instrument(name = "Computing password hash", skip_all)]
    async fn hash(&self, password: Password) -> Result<PasswordHash, PasswordHasherError> {
        let current_span: tracing::Span = tracing::Span::current();
        let params = self.params.clone();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(move || {
                let salt: SaltString = SaltString::generate(rand_core::OsRng);
                Self::argon2(params)
                    .hash_password(password.as_ref().expose_secret().as_bytes(), &salt)
                    .map(|h| PasswordHash::new(Secret::from(h.to_string())))
                    .map_err(|e| PasswordHasherError::HashingFailed(e.to_string()))
            })
        })
        .await
        .map_err(|e| PasswordHasherError::HashingFailed(e.to_string()))?
    }

    #[tracing::instrument(name = "Verify password hash", skip_all)]
    async fn verify(
        &self,
        password: Password,
        expected_hash: PasswordHash,
    ) -> Result<bool, PasswordHasherError> {
        let current_span: tracing::Span = tracing::Span::current();
        let params = self.params.clone();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(move || {
                let expected_hash =
                    password_hash::PasswordHash::new(expected_hash.as_ref().expose_secret())
                        .map_err(|e| PasswordHasherError::MalformedHash(e.to_string()))?;

                match Self::argon2(params)
                    .verify_password(password.as_ref().expose_secret().as_bytes(), &expected_hash)
                {
                    Ok(()) => Ok(true),
                    Err(password_hash::Error::Password) => Ok(false),
                    Err(e) => Err(PasswordHasherError::MalformedHash(e.to_string())),
                }
            })
        })
        .await
        .map_err(|e| PasswordHasherError::HashingFailed(e.to_string()))?
    }
}
