//! Fetch Code Use Case

use std::sync::Arc;

use kernel::id::SubmissionId;

use crate::domain::entities::SubmissionCode;
use crate::domain::repository::SubmissionRepository;
use crate::error::{SubmissionError, SubmissionResult};

pub struct FetchCodeUseCase<R>
where
    R: SubmissionRepository,
{
    repo: Arc<R>,
}

impl<R> FetchCodeUseCase<R>
where
    R: SubmissionRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Source code for the submission whose id is given as text
    pub async fn execute(&self, raw_id: &str) -> SubmissionResult<SubmissionCode> {
        let id: SubmissionId = raw_id.parse().map_err(|_| SubmissionError::InvalidId)?;

        self.repo.find_code(id).await?.ok_or_else(|| {
            tracing::debug!(submission_id = %id, "Code requested for unknown submission");
            SubmissionError::NotFound
        })
    }
}
