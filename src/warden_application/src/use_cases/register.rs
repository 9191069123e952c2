use warden_core::{Password, PasswordHasher, User, UserStore, Username};

use crate::error::AuthError;

/// Register use case - creates a new account with a hashed password
pub struct RegisterUseCase<U, H>
where
    U: UserStore,
    H: PasswordHasher,
{
    user_store: U,
    hasher: H,
}

impl<U, H> RegisterUseCase<U, H>
where
    U: UserStore,
    H: PasswordHasher,
{
    pub fn new(user_store: U, hasher: H) -> Self {
        Self { user_store, hasher }
    }

    /// Execute the register use case
    ///
    /// The duplicate check is the store's atomic insert, so the password is
    /// hashed before the store is consulted.
    ///
    /// # Returns
    /// Ok(()) on success, `AuthError::DuplicateUsername` if the username is taken
    #[tracing::instrument(name = "RegisterUseCase::execute", skip(self, password))]
    pub async fn execute(&self, username: Username, password: Password) -> Result<(), AuthError> {
        let password_hash = self.hasher.hash(password).await?;
        let user = User::new(username, password_hash);

        self.user_store.insert_if_absent(user).await?;

        tracing::info!("User registered");
        Ok(())
    }
}
