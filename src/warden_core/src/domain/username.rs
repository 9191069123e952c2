use std::fmt;

use crate::domain::user::UserError;

/// Maximum number of characters accepted in a username.
pub const MAX_USERNAME_LENGTH: usize = 64;

/// A validated, unique account identifier.
///
/// Usernames are compared byte-for-byte: no case folding or normalization
/// takes place, so `Alice` and `alice` are distinct accounts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    pub fn parse(raw: impl Into<String>) -> Result<Self, UserError> {
        let raw = raw.into();

        if raw.trim().is_empty() {
            return Err(UserError::InvalidUsername(
                "username must not be empty".to_string(),
            ));
        }
        if raw.trim() != raw {
            return Err(UserError::InvalidUsername(
                "username must not start or end with whitespace".to_string(),
            ));
        }
        if raw.chars().count() > MAX_USERNAME_LENGTH {
            return Err(UserError::InvalidUsername(format!(
                "username must be at most {MAX_USERNAME_LENGTH} characters"
            )));
        }
        if raw.chars().any(char::is_control) {
            return Err(UserError::InvalidUsername(
                "username must not contain control characters".to_string(),
            ));
        }

        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Username {
    type Error = UserError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
