//! Gate Router
//!
//! Paths are relative; the binary nests this router under `/api/auth`.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

use crate::application::config::GateConfig;
use crate::presentation::handlers::{self, GateAppState};

/// Create the gate router
pub fn gate_router(config: Arc<GateConfig>) -> Router {
    let state = GateAppState { config };

    Router::new()
        .route("/login", post(handlers::login))
        .route("/logout", post(handlers::logout))
        .route("/status", get(handlers::status))
        .with_state(state)
}
