//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and infrastructure.

pub mod build_dashboard;
pub mod config;
pub mod fetch_code;
pub mod list_submissions;
pub mod record_submission;
