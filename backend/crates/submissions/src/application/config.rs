//! Application Configuration
//!
//! Limits applied to data reported by the browser extension.

/// Submissions application configuration
#[derive(Debug, Clone)]
pub struct SubmissionsConfig {
    /// Upper bound on stored source code, in bytes
    pub max_code_bytes: usize,
    /// Upper bound on the problem URL, in bytes
    pub max_problem_url_len: usize,
}

impl Default for SubmissionsConfig {
    fn default() -> Self {
        Self {
            max_code_bytes: 256 * 1024,
            max_problem_url_len: 2048,
        }
    }
}
