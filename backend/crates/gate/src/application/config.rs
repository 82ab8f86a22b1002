//! Application Configuration
//!
//! Configuration for the shared-secret gate.

use std::time::Duration;

use platform::cookie::CookieConfig;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

use crate::domain::access_token::TokenKey;
use crate::domain::policy::GatePolicy;

/// Gate configuration
#[derive(Debug, Clone)]
pub struct GateConfig {
    /// Shared secret typed on the login page
    pub auth_code: String,
    /// Cookie carrying the access token
    pub cookie_name: String,
    /// HMAC key for access tokens (32 bytes)
    pub session_secret: [u8; 32],
    /// Token and cookie lifetime (28 days)
    pub max_age: Duration,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
    /// Which routes are gated and how
    pub policy: GatePolicy,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            auth_code: String::new(),
            cookie_name: "authCode".to_string(),
            session_secret: [0u8; 32],
            max_age: Duration::from_secs(28 * 24 * 3600),
            cookie_secure: true,
            cookie_same_site: SameSite::Strict,
            policy: GatePolicy::default(),
        }
    }
}

impl GateConfig {
    /// Create config with a random session secret (for development)
    pub fn with_random_secret() -> Self {
        Self {
            session_secret: platform::crypto::random_secret(),
            ..Default::default()
        }
    }

    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Self::with_random_secret()
        }
    }

    pub fn with_auth_code(mut self, auth_code: impl Into<String>) -> Self {
        self.auth_code = auth_code.into();
        self
    }

    pub fn with_policy(mut self, policy: GatePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn max_age_ms(&self) -> i64 {
        self.max_age.as_millis() as i64
    }

    pub fn token_key(&self) -> TokenKey<'_> {
        TokenKey {
            session_secret: &self.session_secret,
            auth_code: &self.auth_code,
        }
    }

    pub fn cookie(&self) -> CookieConfig {
        CookieConfig {
            name: self.cookie_name.clone(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
            max_age_secs: Some(self.max_age.as_secs()),
        }
    }
}
