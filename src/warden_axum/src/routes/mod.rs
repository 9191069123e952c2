//! Axum-specific route handlers.

pub mod login;
pub mod register;

pub use login::{LoginRequest, LoginResponse, login};
pub use register::{RegisterRequest, register};
