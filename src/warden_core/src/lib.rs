pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    claims::Claims,
    password::{Password, PasswordHash},
    session_token::SessionToken,
    user::{User, UserError},
    username::Username,
};

pub use ports::{
    repositories::{UserStore, UserStoreError},
    services::{PasswordHasher, PasswordHasherError, TokenIssuer, TokenIssuerError},
};
