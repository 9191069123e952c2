use thiserror::Error;

use crate::domain::{password::PasswordHash, username::Username};

#[derive(Debug, Error, PartialEq)]
pub enum UserError {
    #[error("Invalid username: {0}")]
    InvalidUsername(String),
    #[error("Invalid password: {0}")]
    InvalidPassword(String),
}

/// A stored account. Records are created once at registration and never
/// modified afterwards.
#[derive(Debug, Clone)]
pub struct User {
    username: Username,
    password_hash: PasswordHash,
}

impl User {
    pub fn new(username: Username, password_hash: PasswordHash) -> Self {
        Self {
            username,
            password_hash,
        }
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }
}
