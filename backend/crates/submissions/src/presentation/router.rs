//! Submissions Router
//!
//! Paths are relative; the binary nests this router under `/api`.

use std::sync::Arc;

use axum::{Router, routing::get};

use crate::application::config::SubmissionsConfig;
use crate::domain::repository::SubmissionRepository;
use crate::infra::postgres::PgSubmissionRepository;
use crate::presentation::handlers::{self, SubmissionsAppState};

/// Create the submissions router with PostgreSQL repository
pub fn submissions_router(repo: PgSubmissionRepository, config: SubmissionsConfig) -> Router {
    submissions_router_generic(repo, config)
}

/// Create a submissions router for any repository implementation
pub fn submissions_router_generic<R>(repo: R, config: SubmissionsConfig) -> Router
where
    R: SubmissionRepository + Clone + Send + Sync + 'static,
{
    let state = SubmissionsAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route(
            "/usage",
            get(handlers::list_usage::<R>).post(handlers::record_usage::<R>),
        )
        .route("/code", get(handlers::get_code::<R>))
        .route("/dashboard", get(handlers::dashboard::<R>))
        .with_state(state)
}
