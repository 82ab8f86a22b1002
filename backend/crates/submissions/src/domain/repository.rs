//! Repository Traits
//!
//! Persistence interface for submissions and the devices they come from.
//! Implementations live in the infra layer.

use kernel::id::SubmissionId;

use crate::domain::entities::{NewDevice, NewSubmission, SubmissionCode, SubmissionRecord};
use crate::error::SubmissionResult;

/// Submission repository trait
#[trait_variant::make(SubmissionRepository: Send)]
pub trait LocalSubmissionRepository {
    /// Every submission joined with its device, newest first
    async fn list_all(&self) -> SubmissionResult<Vec<SubmissionRecord>>;

    /// Store a submission, creating its device on first sight of the address
    ///
    /// An existing device keeps its original snapshot; later reports from
    /// the same address only reference it.
    async fn insert(
        &self,
        submission: NewSubmission,
        device: NewDevice,
    ) -> SubmissionResult<SubmissionRecord>;

    /// Source code of a single submission
    async fn find_code(&self, id: SubmissionId) -> SubmissionResult<Option<SubmissionCode>>;
}
