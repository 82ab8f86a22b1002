//! Submission Error Types
//!
//! Submission-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Submission-specific result type alias
pub type SubmissionResult<T> = Result<T, SubmissionError>;

#[derive(Debug, Error)]
pub enum SubmissionError {
    /// `userData` or `codeInfo` absent from the ingestion body
    #[error("Missing required fields")]
    MissingFields,

    /// A required field was absent or blank
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Source code is {size} bytes, limit is {limit}")]
    CodeTooLarge { size: usize, limit: usize },

    #[error("Problem URL is {len} bytes, limit is {limit}")]
    ProblemUrlTooLong { len: usize, limit: usize },

    /// Submission id did not parse
    #[error("Invalid submission id")]
    InvalidId,

    #[error("No data found")]
    NotFound,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl SubmissionError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            SubmissionError::MissingFields
            | SubmissionError::MissingField(_)
            | SubmissionError::InvalidId => StatusCode::BAD_REQUEST,
            SubmissionError::CodeTooLarge { .. } | SubmissionError::ProblemUrlTooLong { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            SubmissionError::NotFound => StatusCode::NOT_FOUND,
            SubmissionError::Database(_) | SubmissionError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            SubmissionError::MissingFields
            | SubmissionError::MissingField(_)
            | SubmissionError::InvalidId => ErrorKind::BadRequest,
            SubmissionError::CodeTooLarge { .. } | SubmissionError::ProblemUrlTooLong { .. } => {
                ErrorKind::UnprocessableEntity
            }
            SubmissionError::NotFound => ErrorKind::NotFound,
            SubmissionError::Database(_) | SubmissionError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            SubmissionError::Database(e) => {
                tracing::error!(error = %e, "Submission database error");
            }
            SubmissionError::Internal(msg) => {
                tracing::error!(message = %msg, "Submission internal error");
            }
            SubmissionError::CodeTooLarge { size, limit } => {
                tracing::warn!(size, limit, "Rejected oversized submission");
            }
            _ => {
                tracing::debug!(error = %self, "Submission request rejected");
            }
        }
    }
}

impl From<SubmissionError> for AppError {
    fn from(err: SubmissionError) -> Self {
        match err {
            SubmissionError::Database(e) => AppError::from(e),
            SubmissionError::Internal(msg) => {
                // Internal detail stays in the logs
                tracing::debug!(message = %msg, "Masking internal error");
                AppError::internal("Internal server error")
            }
            other => AppError::new(other.kind(), other.to_string()),
        }
    }
}

impl IntoResponse for SubmissionError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}
