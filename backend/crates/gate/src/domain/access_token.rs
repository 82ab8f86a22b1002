//! Access token carried in the gate cookie
//!
//! Format: `<issued_at_ms>.<base64url(HMAC-SHA256)>`. The tag covers the
//! issue time and a digest of the shared auth code, so changing the code
//! invalidates every token issued under the old one.

use platform::crypto::{from_base64_url, hmac_sha256, sha256, to_base64_url, verify_hmac_sha256};

/// Tolerated clock skew for tokens issued "in the future"
const MAX_CLOCK_SKEW_MS: i64 = 60_000;

/// Why a presented token was not accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenRejection {
    Malformed,
    BadSignature,
    Expired,
    NotYetValid,
}

impl TokenRejection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenRejection::Malformed => "malformed",
            TokenRejection::BadSignature => "bad_signature",
            TokenRejection::Expired => "expired",
            TokenRejection::NotYetValid => "not_yet_valid",
        }
    }
}

/// Key material a token is bound to
pub struct TokenKey<'a> {
    pub session_secret: &'a [u8; 32],
    pub auth_code: &'a str,
}

impl TokenKey<'_> {
    fn signing_input(&self, issued_at_ms: i64) -> Vec<u8> {
        let mut input = issued_at_ms.to_string().into_bytes();
        input.push(b'.');
        input.extend_from_slice(&sha256(self.auth_code.as_bytes()));
        input
    }
}

/// A verified token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessToken {
    pub issued_at_ms: i64,
}

impl AccessToken {
    pub fn sign(issued_at_ms: i64, key: &TokenKey<'_>) -> String {
        let tag = hmac_sha256(key.session_secret, &key.signing_input(issued_at_ms));
        format!("{issued_at_ms}.{}", to_base64_url(&tag))
    }

    pub fn verify(
        token: &str,
        key: &TokenKey<'_>,
        now_ms: i64,
        max_age_ms: i64,
    ) -> Result<Self, TokenRejection> {
        let (issued, tag) = token.split_once('.').ok_or(TokenRejection::Malformed)?;
        let issued_at_ms: i64 = issued.parse().map_err(|_| TokenRejection::Malformed)?;
        let tag = from_base64_url(tag).map_err(|_| TokenRejection::Malformed)?;

        if !verify_hmac_sha256(key.session_secret, &key.signing_input(issued_at_ms), &tag) {
            return Err(TokenRejection::BadSignature);
        }
        if issued_at_ms > now_ms + MAX_CLOCK_SKEW_MS {
            return Err(TokenRejection::NotYetValid);
        }
        if now_ms - issued_at_ms >= max_age_ms {
            return Err(TokenRejection::Expired);
        }

        Ok(Self { issued_at_ms })
    }
}
