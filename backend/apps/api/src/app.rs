//! Router assembly
//!
//! Everything the binary serves, minus the outer CORS and trace layers.

use std::sync::Arc;

use axum::http::Method;
use axum::middleware::from_fn_with_state;
use axum::response::Html;
use axum::{Router, routing::get};
use gate::{GateAppState, GateConfig, GatePolicy, gate_router, require_gate};

const INDEX_HTML: &str = include_str!("../static/index.html");
const AUTH_HTML: &str = include_str!("../static/auth.html");

/// Routes reachable without the access cookie, besides the gate's own
pub fn gate_policy() -> GatePolicy {
    // The browser extension reports without a cookie
    GatePolicy::default().allow_public(Method::POST, "/api/usage")
}

pub fn build_router(gate_config: Arc<GateConfig>, submissions: Router) -> Router {
    let api = submissions.nest("/auth", gate_router(gate_config.clone()));

    Router::new()
        .route("/", get(index_page))
        .route("/auth", get(auth_page))
        .route("/health", get(health))
        .nest("/api", api)
        .layer(from_fn_with_state(
            GateAppState {
                config: gate_config,
            },
            require_gate,
        ))
}

async fn index_page() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn auth_page() -> Html<&'static str> {
    Html(AUTH_HTML)
}

async fn health() -> &'static str {
    "ok"
}
