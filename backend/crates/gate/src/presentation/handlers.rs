//! HTTP Handlers

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use chrono::Utc;
use platform::cookie::{extract_cookie, to_header_value};

use crate::application::config::GateConfig;
use crate::application::{CheckAccessUseCase, LoginUseCase};
use crate::error::GateResult;
use crate::presentation::dto::{LoginResponse, StatusResponse};

/// Request header carrying the shared auth code
pub const AUTH_CODE_HEADER: &str = "authcode";

/// Shared state for gate handlers and middleware
#[derive(Clone)]
pub struct GateAppState {
    pub config: Arc<GateConfig>,
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<GateAppState>,
    headers: HeaderMap,
) -> GateResult<impl IntoResponse> {
    let provided = headers
        .get(AUTH_CODE_HEADER)
        .and_then(|value| value.to_str().ok());

    let token =
        LoginUseCase::new(state.config.clone()).execute(provided, Utc::now().timestamp_millis())?;
    let cookie = state.config.cookie().build_set_cookie(&token);

    Ok((
        [(header::SET_COOKIE, to_header_value(&cookie))],
        Json(LoginResponse {
            success: true,
            message: "Authentication successful",
        }),
    ))
}

/// POST /api/auth/logout
pub async fn logout(State(state): State<GateAppState>) -> impl IntoResponse {
    let cookie = state.config.cookie().build_delete_cookie();

    tracing::info!("Access cookie cleared");

    (
        StatusCode::NO_CONTENT,
        [(header::SET_COOKIE, to_header_value(&cookie))],
    )
}

/// GET /api/auth/status
pub async fn status(State(state): State<GateAppState>, headers: HeaderMap) -> Json<StatusResponse> {
    let token = extract_cookie(&headers, &state.config.cookie_name);
    let authenticated = CheckAccessUseCase::new(state.config.clone())
        .is_authenticated(token.as_deref(), Utc::now().timestamp_millis());

    Json(StatusResponse { authenticated })
}
