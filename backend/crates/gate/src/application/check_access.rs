//! Check Access Use Case

use std::sync::Arc;

use axum::http::Method;

use crate::application::config::GateConfig;
use crate::domain::access_token::AccessToken;
use crate::domain::policy::Decision;

pub struct CheckAccessUseCase {
    config: Arc<GateConfig>,
}

impl CheckAccessUseCase {
    pub fn new(config: Arc<GateConfig>) -> Self {
        Self { config }
    }

    /// Whether the cookie value is a live token for the current auth code
    pub fn is_authenticated(&self, token: Option<&str>, now_ms: i64) -> bool {
        let Some(token) = token else {
            return false;
        };

        match AccessToken::verify(
            token,
            &self.config.token_key(),
            now_ms,
            self.config.max_age_ms(),
        ) {
            Ok(_) => true,
            Err(reason) => {
                tracing::debug!(reason = reason.as_str(), "Access token rejected");
                false
            }
        }
    }

    pub fn decide(&self, method: &Method, path: &str, token: Option<&str>, now_ms: i64) -> Decision {
        let authenticated = self.is_authenticated(token, now_ms);
        self.config.policy.decide(method, path, authenticated)
    }
}
