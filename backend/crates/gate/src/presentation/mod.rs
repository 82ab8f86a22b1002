//! Presentation Layer
//!
//! Login endpoints, DTOs and the gate middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use middleware::require_gate;
