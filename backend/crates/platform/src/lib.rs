//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations used by the gate and the submission API:
//! - Cookie building and parsing
//! - Hashing and HMAC signing (SHA-256), Base64
//! - Client address extraction behind reverse proxies

pub mod client;
pub mod cookie;
pub mod crypto;
