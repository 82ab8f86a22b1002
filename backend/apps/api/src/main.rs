//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

mod app;

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::http::{self, HeaderName, Method, header};
use base64::Engine;
use base64::engine::general_purpose;
use gate::GateConfig;
use sqlx::postgres::PgPoolOptions;
use submissions::{
    InMemorySubmissionRepository, SubmissionsConfig, store::SubmissionStore, submissions_router,
    submissions_router_generic,
};
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "dashboard_api=info,gate=info,submissions=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Gate configuration
    let auth_code = env::var("AUTH_CODE").context("AUTH_CODE must be set in environment")?;
    if auth_code.trim().is_empty() {
        anyhow::bail!("AUTH_CODE must not be empty");
    }

    let gate_config = if cfg!(debug_assertions) {
        GateConfig::development()
    } else {
        // In production, load secret from environment
        let secret_b64 = env::var("GATE_SESSION_SECRET")
            .context("GATE_SESSION_SECRET must be set in production")?;
        let secret_bytes = general_purpose::STANDARD.decode(secret_b64.trim())?;
        let secret: [u8; 32] = secret_bytes
            .as_slice()
            .try_into()
            .context("GATE_SESSION_SECRET must decode to 32 bytes")?;
        GateConfig {
            session_secret: secret,
            ..GateConfig::default()
        }
    };
    let gate_config = Arc::new(
        gate_config
            .with_auth_code(auth_code)
            .with_policy(app::gate_policy()),
    );

    // Storage: PostgreSQL when configured, otherwise in memory
    let submissions_config = SubmissionsConfig::default();
    let submissions = match env::var("DATABASE_URL") {
        Ok(database_url) => {
            let pool = PgPoolOptions::new()
                .max_connections(5)
                .connect(&database_url)
                .await?;

            tracing::info!("Connected to database");

            // Run migrations
            sqlx::migrate!("../../../database/migrations")
                .run(&pool)
                .await?;

            tracing::info!("Migrations completed");

            submissions_router(SubmissionStore::new(pool), submissions_config)
        }
        Err(_) => {
            tracing::warn!("DATABASE_URL not set, submissions are kept in memory only");
            submissions_router_generic(InMemorySubmissionRepository::new(), submissions_config)
        }
    };

    // CORS configuration
    let frontend_origins =
        env::var("FRONTEND_ORIGINS").unwrap_or_else(|_| "http://localhost:3000".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::ACCEPT,
            HeaderName::from_static("authcode"),
        ]))
        .allow_credentials(true);

    // Build router
    let app = app::build_router(gate_config, submissions)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let addr: SocketAddr = env::var("BIND_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:31113".to_string())
        .parse()
        .context("BIND_ADDR must be a socket address")?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
