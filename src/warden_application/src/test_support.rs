// Mock ports shared by the use case tests
use std::collections::HashMap;
use std::sync::Arc;

use secrecy::{ExposeSecret, Secret};
use tokio::sync::RwLock;
use warden_core::{
    Password, PasswordHash, PasswordHasher, PasswordHasherError, SessionToken, TokenIssuer,
    TokenIssuerError, User, UserStore, UserStoreError, Username,
};

pub fn username(raw: &str) -> Username {
    Username::parse(raw).unwrap()
}

pub fn password(raw: &str) -> Password {
    Password::try_from(Secret::from(raw.to_string())).unwrap()
}

pub fn stored_user(name: &str, plaintext: &str) -> User {
    User::new(
        username(name),
        PasswordHash::new(Secret::from(format!("plain${plaintext}"))),
    )
}

#[derive(Clone, Default)]
pub struct MockUserStore {
    users: Arc<RwLock<HashMap<Username, User>>>,
    unavailable: bool,
}

impl MockUserStore {
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let users = users
            .into_iter()
            .map(|user| (user.username().clone(), user))
            .collect();
        Self {
            users: Arc::new(RwLock::new(users)),
            unavailable: false,
        }
    }

    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn get(&self, username: &Username) -> Option<User> {
        self.users.read().await.get(username).cloned()
    }
}

#[async_trait::async_trait]
impl UserStore for MockUserStore {
    async fn insert_if_absent(&self, user: User) -> Result<(), UserStoreError> {
        if self.unavailable {
            return Err(UserStoreError::UnexpectedError("connection refused".into()));
        }
        let mut users = self.users.write().await;
        if users.contains_key(user.username()) {
            return Err(UserStoreError::UserAlreadyExists);
        }
        users.insert(user.username().clone(), user);
        Ok(())
    }

    async fn get_user(&self, username: &Username) -> Result<User, UserStoreError> {
        if self.unavailable {
            return Err(UserStoreError::UnexpectedError("connection refused".into()));
        }
        self.get(username).await.ok_or(UserStoreError::UserNotFound)
    }
}

/// Reversible stand-in for a real hasher: `plain$<password>`.
#[derive(Clone)]
pub struct PlainHasher;

#[async_trait::async_trait]
impl PasswordHasher for PlainHasher {
    async fn hash(&self, password: Password) -> Result<PasswordHash, PasswordHasherError> {
        Ok(PasswordHash::new(Secret::from(format!(
            "plain${}",
            password.as_ref().expose_secret()
        ))))
    }

    async fn verify(
        &self,
        password: Password,
        expected_hash: PasswordHash,
    ) -> Result<bool, PasswordHasherError> {
        let candidate = format!("plain${}", password.as_ref().expose_secret());
        Ok(&candidate == expected_hash.as_ref().expose_secret())
    }
}

#[derive(Clone)]
pub struct FixedTokenIssuer;

impl TokenIssuer for FixedTokenIssuer {
    fn issue(&self, username: &Username) -> Result<SessionToken, TokenIssuerError> {
        Ok(SessionToken::new(format!("token-for-{username}")))
    }
}

/// Hasher whose backend always errors.
#[derive(Clone)]
pub struct FailingHasher;

#[async_trait::async_trait]
impl PasswordHasher for FailingHasher {
    async fn hash(&self, _password: Password) -> Result<PasswordHash, PasswordHasherError> {
        Err(PasswordHasherError::HashingFailed("out of memory".into()))
    }

    async fn verify(
        &self,
        _password: Password,
        _expected_hash: PasswordHash,
    ) -> Result<bool, PasswordHasherError> {
        Err(PasswordHasherError::HashingFailed("out of memory".into()))
    }
}

#[derive(Clone)]
pub struct FailingTokenIssuer;

impl TokenIssuer for FailingTokenIssuer {
    fn issue(&self, _username: &Username) -> Result<SessionToken, TokenIssuerError> {
        Err(TokenIssuerError::SigningFailed("invalid key".into()))
    }
}
