//! Axum HTTP boundary for the register and login flows.
//!
//! Routes extract JSON bodies, parse them into domain types, run the use
//! cases from `warden_application` and map the outcome onto status codes:
//!
//! | Outcome                   | Status | Body                                            |
//! |---------------------------|--------|-------------------------------------------------|
//! | Register success          | 201    | `{ "message": "User registered successfully" }` |
//! | Register duplicate        | 400    | `{ "message": "Username already exists" }`      |
//! | Login success             | 200    | `{ "token": "<jwt>" }`                          |
//! | Login invalid credentials | 401    | `{ "message": "Invalid credentials" }`          |
//! | Register malformed input  | 400    | `{ "message": "Invalid input: <reason>" }`      |
//! | Login malformed input     | 401    | `{ "message": "Invalid credentials" }`          |
//!
//! # Usage
//!
//! ```ignore
//! let app = Router::new()
//!     .route("/register", post(routes::register::<U, H>))
//!     .with_state((user_store, hasher));
//! ```

pub mod error;
pub mod routes;

pub use error::{AuthApiError, MessageResponse};
pub use routes::{LoginRequest, LoginResponse, RegisterRequest, login, register};
