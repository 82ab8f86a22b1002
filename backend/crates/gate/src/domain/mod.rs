//! Domain Layer
//!
//! - Signed access token carried in the cookie
//! - Route policy deciding what the gate does with a request

pub mod access_token;
pub mod policy;
