//! Application Layer - Use Cases

pub mod check_access;
pub mod config;
pub mod login;

pub use check_access::CheckAccessUseCase;
pub use login::LoginUseCase;
