use serde::{Deserialize, Serialize};

/// Claims carried by a session token.
///
/// Timestamps are seconds since the Unix epoch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Username of the authenticated account
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}
