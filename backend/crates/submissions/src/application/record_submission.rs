//! Record Submission Use Case

use std::net::IpAddr;
use std::sync::Arc;

use crate::application::config::SubmissionsConfig;
use crate::domain::entities::{NewDevice, NewSubmission, SubmissionRecord};
use crate::domain::repository::SubmissionRepository;
use crate::error::{SubmissionError, SubmissionResult};

/// Report sent by the browser extension, before validation
#[derive(Debug, Clone, Default)]
pub struct RecordSubmissionInput {
    pub device: NewDevice,
    pub submission: NewSubmission,
}

/// Record Submission Use Case
pub struct RecordSubmissionUseCase<R>
where
    R: SubmissionRepository,
{
    repo: Arc<R>,
    config: Arc<SubmissionsConfig>,
}

impl<R> RecordSubmissionUseCase<R>
where
    R: SubmissionRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<SubmissionsConfig>) -> Self {
        Self { repo, config }
    }

    /// Validate and store one report
    ///
    /// `fallback_ip` stands in for a blank reported address.
    pub async fn execute(
        &self,
        input: RecordSubmissionInput,
        fallback_ip: Option<IpAddr>,
    ) -> SubmissionResult<SubmissionRecord> {
        let (submission, device) = normalize(input, fallback_ip, &self.config)?;

        let record = self.repo.insert(submission, device).await?;

        tracing::info!(
            submission_id = %record.submission.id,
            device_id = %record.submission.device_id,
            status = %record.submission.status(),
            "Submission recorded"
        );

        Ok(record)
    }
}

/// Trim, apply defaults and enforce the limits
fn normalize(
    input: RecordSubmissionInput,
    fallback_ip: Option<IpAddr>,
    config: &SubmissionsConfig,
) -> SubmissionResult<(NewSubmission, NewDevice)> {
    let RecordSubmissionInput {
        mut device,
        mut submission,
    } = input;

    device.ip = match device.ip.trim() {
        "" => fallback_ip
            .map(|ip| ip.to_string())
            .ok_or(SubmissionError::MissingField("ip"))?,
        ip => ip.to_string(),
    };
    device.handle = non_blank(device.handle);

    submission.problem_url = required(&submission.problem_url, "problemUrl")?;
    if submission.problem_url.len() > config.max_problem_url_len {
        return Err(SubmissionError::ProblemUrlTooLong {
            len: submission.problem_url.len(),
            limit: config.max_problem_url_len,
        });
    }

    if submission.code.trim().is_empty() {
        return Err(SubmissionError::MissingField("code"));
    }
    if submission.code.len() > config.max_code_bytes {
        return Err(SubmissionError::CodeTooLarge {
            size: submission.code.len(),
            limit: config.max_code_bytes,
        });
    }

    submission.code_language = required(&submission.code_language, "codeLanguage")?;
    submission.status = submission.status.trim().to_string();
    submission.problem_name = non_blank(submission.problem_name);

    Ok((submission, device))
}

fn required(value: &str, field: &'static str) -> SubmissionResult<String> {
    match value.trim() {
        "" => Err(SubmissionError::MissingField(field)),
        trimmed => Ok(trimmed.to_string()),
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
