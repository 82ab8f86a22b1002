//! Build Dashboard Use Case
//!
//! One read of the store feeds both the statistics (always over the full
//! list) and the filtered list shown in the table.

use std::sync::Arc;

use chrono::{DateTime, TimeZone};

use crate::domain::entities::SubmissionRecord;
use crate::domain::repository::SubmissionRepository;
use crate::domain::search::{filter_submissions, user_options};
use crate::domain::statistics::SubmissionStats;
use crate::domain::value_objects::{SearchQuery, UserFilter};
use crate::error::SubmissionResult;

/// Filter state chosen on the dashboard
#[derive(Debug, Clone, Default)]
pub struct DashboardQuery {
    pub search: SearchQuery,
    pub user: UserFilter,
}

#[derive(Debug, Clone)]
pub struct DashboardView {
    pub stats: SubmissionStats,
    /// Filtered, newest first
    pub submissions: Vec<SubmissionRecord>,
    /// Options for the user selector
    pub users: Vec<String>,
    /// Size of the unfiltered list
    pub total: usize,
}

pub struct BuildDashboardUseCase<R>
where
    R: SubmissionRepository,
{
    repo: Arc<R>,
}

impl<R> BuildDashboardUseCase<R>
where
    R: SubmissionRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute<Tz: TimeZone>(
        &self,
        query: &DashboardQuery,
        now: &DateTime<Tz>,
    ) -> SubmissionResult<DashboardView> {
        let records = self.repo.list_all().await?;

        let stats = SubmissionStats::compute(&records, now);
        let users = user_options(&records);
        let submissions: Vec<SubmissionRecord> =
            filter_submissions(&records, &query.search, &query.user)
                .into_iter()
                .cloned()
                .collect();

        tracing::debug!(
            total = records.len(),
            shown = submissions.len(),
            query = query.search.as_str(),
            "Built dashboard"
        );

        Ok(DashboardView {
            stats,
            submissions,
            users,
            total: records.len(),
        })
    }
}
