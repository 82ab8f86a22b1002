//! Gate (shared-secret access control) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Access token format, route policy
//! - `application/` - Login and access-check use cases
//! - `presentation/` - HTTP handlers, DTOs, router, middleware
//!
//! ## Security Model
//! - A single auth code, compared in constant time, unlocks the dashboard
//! - The cookie holds an HMAC-signed issue time bound to the auth code,
//!   never the code itself
//! - Tokens expire with the cookie (28 days); rotating the auth code
//!   revokes all of them
//! - API routes answer 401 with `X-Auth-Required: true`; pages redirect to
//!   the login page

pub mod application;
pub mod domain;
pub mod error;
pub mod presentation;

// Re-exports for convenience
pub use application::config::GateConfig;
pub use domain::policy::GatePolicy;
pub use error::{GateError, GateResult};
pub use presentation::handlers::GateAppState;
pub use presentation::middleware::require_gate;
pub use presentation::router::gate_router;

#[cfg(test)]
mod tests;
