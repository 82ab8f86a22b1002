//! Gate Middleware
//!
//! Applied to the whole application; the policy in [`GateConfig`] decides
//! which requests pass.
//!
//! [`GateConfig`]: crate::application::config::GateConfig

use axum::body::Body;
use axum::extract::{OriginalUri, State};
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use chrono::Utc;
use platform::cookie::extract_cookie;

use crate::application::CheckAccessUseCase;
use crate::domain::policy::Decision;
use crate::error::GateError;
use crate::presentation::handlers::GateAppState;

/// Middleware enforcing the gate policy
///
/// Use with `axum::middleware::from_fn_with_state`.
pub async fn require_gate(
    State(state): State<GateAppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let token = extract_cookie(req.headers(), &state.config.cookie_name);

    // Nested routers see a stripped path; the policy works on the full one
    let path = req
        .extensions()
        .get::<OriginalUri>()
        .map_or_else(|| req.uri().path(), |OriginalUri(uri)| uri.path())
        .to_string();

    let decision = CheckAccessUseCase::new(state.config.clone()).decide(
        req.method(),
        &path,
        token.as_deref(),
        Utc::now().timestamp_millis(),
    );

    match decision {
        Decision::Allow => next.run(req).await,
        Decision::Unauthorized => GateError::SessionInvalid.into_response(),
        Decision::Redirect(to) => {
            tracing::debug!(from = %path, to, "Gate redirect");
            Redirect::to(to).into_response()
        }
    }
}
