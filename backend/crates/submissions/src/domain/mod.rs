//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (Device, Submission, SubmissionRecord)
//! - Value objects (SubmissionStatus, SearchQuery, UserFilter)
//! - Statistics and search over the submission list
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
pub mod search;
pub mod statistics;
pub mod value_objects;
