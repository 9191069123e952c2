//! Application layer: the register and login flows, expressed against the
//! ports defined in `warden_core`.

pub mod error;
pub mod use_cases;

pub use error::AuthError;
pub use use_cases::{LoginUseCase, RegisterUseCase};

#[cfg(test)]
pub(crate) mod test_support;
