//! # Warden - Credential Verification Service Library
//!
//! Facade crate that re-exports the public APIs of the workspace crates.
//!
//! ## Structure
//!
//! - **Core domain types**: `Username`, `Password`, `User`, `Claims`, `SessionToken`
//! - **Ports**: `UserStore`, `PasswordHasher`, `TokenIssuer`
//! - **Use cases**: `RegisterUseCase`, `LoginUseCase`
//! - **Adapters**: `PostgresUserStore`, `HashMapUserStore`, `Argon2PasswordHasher`, `JwtTokenIssuer`
//! - **Service**: `AuthService` - router and standalone server

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use warden_core::*;
}

pub use warden_core::{Claims, Password, PasswordHash, SessionToken, User, UserError, Username};

// ============================================================================
// Ports
// ============================================================================

pub use warden_core::{
    PasswordHasher, PasswordHasherError, TokenIssuer, TokenIssuerError, UserStore, UserStoreError,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use warden_application::*;
}

pub use warden_application::{AuthError, LoginUseCase, RegisterUseCase};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// HTTP route handlers
    pub mod http {
        pub use warden_axum::*;
    }

    /// Persistence implementations
    pub mod persistence {
        pub use warden_adapters::persistence::*;
    }

    /// Password hashing
    pub mod hashing {
        pub use warden_adapters::hashing::*;
    }

    /// Session token signing and validation
    pub mod tokens {
        pub use warden_adapters::tokens::*;
    }

    /// Configuration
    pub mod config {
        pub use warden_adapters::config::*;
    }
}

pub use warden_adapters::{
    Argon2PasswordHasher, HashMapUserStore, JwtAuthConfig, JwtTokenIssuer, PostgresUserStore,
};

// ============================================================================
// Auth Service (Main Entry Point)
// ============================================================================

pub use warden_auth_service::{AuthService, configure_postgresql};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing the port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};
