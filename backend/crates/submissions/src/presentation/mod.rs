//! Presentation Layer
//!
//! HTTP handlers and DTOs for the submission endpoints.

pub mod dto;
pub mod handlers;
pub mod router;
