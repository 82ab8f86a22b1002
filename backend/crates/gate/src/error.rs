//! Gate Error Types

use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

pub type GateResult<T> = Result<T, GateError>;

/// Header telling API clients to run the login flow
pub const AUTH_REQUIRED_HEADER: &str = "x-auth-required";

#[derive(Debug, Error)]
pub enum GateError {
    /// Login attempted with a wrong or missing code
    #[error("Invalid auth code")]
    InvalidAuthCode,

    /// Gated endpoint called without a valid token
    #[error("Authentication required")]
    SessionInvalid,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl GateError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            GateError::InvalidAuthCode | GateError::SessionInvalid => StatusCode::UNAUTHORIZED,
            GateError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            GateError::InvalidAuthCode | GateError::SessionInvalid => ErrorKind::Unauthorized,
            GateError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    fn log(&self) {
        match self {
            GateError::Internal(msg) => {
                tracing::error!(message = %msg, "Gate internal error");
            }
            GateError::InvalidAuthCode => {
                tracing::warn!("Login with invalid auth code");
            }
            GateError::SessionInvalid => {
                tracing::debug!("Gated request without valid token");
            }
        }
    }
}

impl From<GateError> for AppError {
    fn from(err: GateError) -> Self {
        match err {
            GateError::Internal(_) => AppError::internal("Internal server error"),
            other => AppError::new(other.kind(), other.to_string()),
        }
    }
}

impl IntoResponse for GateError {
    fn into_response(self) -> Response {
        self.log();
        let auth_required = matches!(self, GateError::SessionInvalid);

        let mut response = AppError::from(self).into_response();
        if auth_required {
            response
                .headers_mut()
                .insert(AUTH_REQUIRED_HEADER, HeaderValue::from_static("true"));
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(GateError::InvalidAuthCode.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(GateError::SessionInvalid.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            GateError::Internal("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_session_invalid_sets_header() {
        let response = GateError::SessionInvalid.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(response.headers()[AUTH_REQUIRED_HEADER], "true");

        let response = GateError::InvalidAuthCode.into_response();
        assert!(response.headers().get(AUTH_REQUIRED_HEADER).is_none());
    }

    #[test]
    fn test_message_is_public() {
        let app: AppError = GateError::InvalidAuthCode.into();
        assert_eq!(app.message(), "Invalid auth code");
    }
}
