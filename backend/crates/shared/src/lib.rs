//! Shared Kernel
//!
//! Vocabulary shared by every dashboard crate:
//! - the unified [`error::app_error::AppError`] and its HTTP classification
//! - typed identifiers for submissions and devices
//!
//! Keep this crate small. Anything that only one domain needs belongs
//! in that domain's crate.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
