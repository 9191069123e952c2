use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{user::User, username::Username};

// UserStore port trait and errors
#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("User not found")]
    UserNotFound,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for UserStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::UserAlreadyExists, Self::UserAlreadyExists)
                | (Self::UserNotFound, Self::UserNotFound)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

/// Persistence port for user records.
///
/// Implementations must make `insert_if_absent` atomic: two concurrent calls
/// for the same username may not both succeed.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Stores `user` unless a record with the same username already exists,
    /// in which case `UserAlreadyExists` is returned and nothing is written.
    async fn insert_if_absent(&self, user: User) -> Result<(), UserStoreError>;

    async fn get_user(&self, username: &Username) -> Result<User, UserStoreError>;
}
