//! HTTP Handlers

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Json;
use axum::extract::{ConnectInfo, Query, State};
use axum::http::{Extensions, HeaderMap};
use platform::client::extract_client_ip;

use crate::application::build_dashboard::{BuildDashboardUseCase, DashboardQuery};
use crate::application::config::SubmissionsConfig;
use crate::application::fetch_code::FetchCodeUseCase;
use crate::application::list_submissions::ListSubmissionsUseCase;
use crate::application::record_submission::RecordSubmissionUseCase;
use crate::domain::repository::SubmissionRepository;
use crate::domain::value_objects::{SearchQuery, UserFilter};
use crate::error::{SubmissionError, SubmissionResult};
use crate::presentation::dto::{
    CodeDto, CodeQuery, DashboardDto, DashboardParams, DataResponse, MessageResponse,
    SubmissionDto, UsageRequest,
};

/// Shared state for submission handlers
#[derive(Clone)]
pub struct SubmissionsAppState<R>
where
    R: SubmissionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<SubmissionsConfig>,
}

/// POST /api/usage
pub async fn record_usage<R>(
    State(state): State<SubmissionsAppState<R>>,
    headers: HeaderMap,
    extensions: Extensions,
    Json(req): Json<UsageRequest>,
) -> SubmissionResult<Json<MessageResponse>>
where
    R: SubmissionRepository + Clone + Send + Sync + 'static,
{
    let input = req.into_input().ok_or(SubmissionError::MissingFields)?;

    // Peer address is only known when served with connect info
    let direct_ip = extensions
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip());
    let fallback_ip = extract_client_ip(&headers, direct_ip);

    let use_case = RecordSubmissionUseCase::new(state.repo.clone(), state.config.clone());
    use_case.execute(input, fallback_ip).await?;

    Ok(Json(MessageResponse {
        success: true,
        message: "Successfully saved",
    }))
}

/// GET /api/usage
pub async fn list_usage<R>(
    State(state): State<SubmissionsAppState<R>>,
) -> SubmissionResult<Json<DataResponse<Vec<SubmissionDto>>>>
where
    R: SubmissionRepository + Clone + Send + Sync + 'static,
{
    let records = ListSubmissionsUseCase::new(state.repo.clone())
        .execute()
        .await?;

    Ok(Json(DataResponse::ok(
        records.iter().map(SubmissionDto::from).collect(),
    )))
}

/// GET /api/code?id=
pub async fn get_code<R>(
    State(state): State<SubmissionsAppState<R>>,
    Query(query): Query<CodeQuery>,
) -> SubmissionResult<Json<DataResponse<CodeDto>>>
where
    R: SubmissionRepository + Clone + Send + Sync + 'static,
{
    let code = FetchCodeUseCase::new(state.repo.clone())
        .execute(&query.id)
        .await?;

    Ok(Json(DataResponse::ok(CodeDto::from(code))))
}

/// GET /api/dashboard?q=&user=
pub async fn dashboard<R>(
    State(state): State<SubmissionsAppState<R>>,
    Query(params): Query<DashboardParams>,
) -> SubmissionResult<Json<DataResponse<DashboardDto>>>
where
    R: SubmissionRepository + Clone + Send + Sync + 'static,
{
    let query = DashboardQuery {
        search: SearchQuery::new(params.q.as_deref().unwrap_or_default()),
        user: UserFilter::from_param(params.user.as_deref()),
    };

    let view = BuildDashboardUseCase::new(state.repo.clone())
        .execute(&query, &chrono::Local::now())
        .await?;

    Ok(Json(DataResponse::ok(DashboardDto::from(view))))
}
