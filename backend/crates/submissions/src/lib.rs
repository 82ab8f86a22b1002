//! Submissions Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, statistics, search, repository traits
//! - `application/` - Use cases
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Data flow
//! - The browser extension posts one report per submission; the device is
//!   created on first sight of its address and never changed afterwards
//! - The dashboard reads the whole list once per request; statistics and
//!   filtering are pure functions over that list

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::SubmissionsConfig;
pub use error::{SubmissionError, SubmissionResult};
pub use infra::memory::InMemorySubmissionRepository;
pub use infra::postgres::PgSubmissionRepository;
pub use presentation::router::{submissions_router, submissions_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::domain::statistics::SubmissionStats;
    pub use crate::domain::value_objects::*;
    pub use crate::presentation::dto::*;
}

pub mod store {
    pub use crate::infra::memory::InMemorySubmissionRepository as MemoryStore;
    pub use crate::infra::postgres::PgSubmissionRepository as SubmissionStore;
}

#[cfg(test)]
mod tests;
