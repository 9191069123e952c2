use warden_core::{Password, PasswordHasher, SessionToken, TokenIssuer, UserStore, Username};

use crate::error::AuthError;

/// Login use case - verifies credentials and issues a session token
pub struct LoginUseCase<U, H, T>
where
    U: UserStore,
    H: PasswordHasher,
    T: TokenIssuer,
{
    user_store: U,
    hasher: H,
    token_issuer: T,
}

impl<U, H, T> LoginUseCase<U, H, T>
where
    U: UserStore,
    H: PasswordHasher,
    T: TokenIssuer,
{
    pub fn new(user_store: U, hasher: H, token_issuer: T) -> Self {
        Self {
            user_store,
            hasher,
            token_issuer,
        }
    }

    /// Execute the login use case
    ///
    /// # Arguments
    /// * `username` - Account to log in as
    /// * `password` - Plaintext password to check against the stored hash
    ///
    /// # Returns
    /// A freshly signed `SessionToken`, or `AuthError::InvalidCredentials` for
    /// both unknown usernames and wrong passwords
    #[tracing::instrument(name = "LoginUseCase::execute", skip(self, password))]
    pub async fn execute(
        &self,
        username: Username,
        password: Password,
    ) -> Result<SessionToken, AuthError> {
        let user = self.user_store.get_user(&username).await?;

        let matches = self
            .hasher
            .verify(password, user.password_hash().clone())
            .await?;
        if !matches {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.token_issuer.issue(user.username())?;
        Ok(token)
    }
}
