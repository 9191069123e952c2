pub mod claims;
pub mod password;
pub mod session_token;
pub mod user;
pub mod username;
