//! List Submissions Use Case

use std::sync::Arc;

use crate::domain::entities::SubmissionRecord;
use crate::domain::repository::SubmissionRepository;
use crate::error::SubmissionResult;

pub struct ListSubmissionsUseCase<R>
where
    R: SubmissionRepository,
{
    repo: Arc<R>,
}

impl<R> ListSubmissionsUseCase<R>
where
    R: SubmissionRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Every submission, newest first. An empty store is not an error.
    pub async fn execute(&self) -> SubmissionResult<Vec<SubmissionRecord>> {
        let records = self.repo.list_all().await?;
        tracing::debug!(count = records.len(), "Listed submissions");
        Ok(records)
    }
}
