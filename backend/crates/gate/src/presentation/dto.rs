//! API DTOs

use serde::Serialize;

/// Response for POST /api/auth/login
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: &'static str,
}

/// Response for GET /api/auth/status
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub authenticated: bool,
}
