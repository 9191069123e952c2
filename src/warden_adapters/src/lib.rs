//! Infrastructure adapters for the ports declared in `warden_core`.

pub mod config;
pub mod hashing;
pub mod persistence;
pub mod tokens;

pub use hashing::Argon2PasswordHasher;
pub use persistence::{HashMapUserStore, MIGRATOR, PostgresUserStore};
pub use tokens::{JwtAuthConfig, JwtTokenIssuer, TokenAuthError, validate_auth_token};
