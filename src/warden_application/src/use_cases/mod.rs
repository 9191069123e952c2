pub mod login;
pub mod register;

pub use login::LoginUseCase;
pub use register::RegisterUseCase;
