//! Login Use Case

use std::sync::Arc;

use platform::crypto::constant_time_eq;

use crate::application::config::GateConfig;
use crate::domain::access_token::AccessToken;
use crate::error::{GateError, GateResult};

pub struct LoginUseCase {
    config: Arc<GateConfig>,
}

impl LoginUseCase {
    pub fn new(config: Arc<GateConfig>) -> Self {
        Self { config }
    }

    /// Exchange the shared auth code for a signed access token
    ///
    /// A blank configured code never matches, so an unconfigured gate
    /// stays closed.
    pub fn execute(&self, provided: Option<&str>, now_ms: i64) -> GateResult<String> {
        let expected = self.config.auth_code.as_bytes();
        let provided = provided.unwrap_or_default();

        if expected.is_empty() || !constant_time_eq(provided.as_bytes(), expected) {
            return Err(GateError::InvalidAuthCode);
        }

        let token = AccessToken::sign(now_ms, &self.config.token_key());
        tracing::info!(issued_at_ms = now_ms, "Access token issued");
        Ok(token)
    }
}
