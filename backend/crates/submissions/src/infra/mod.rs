//! Infrastructure Layer - Storage implementations

pub mod memory;
pub mod postgres;
