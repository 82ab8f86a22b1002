//! Submission statistics
//!
//! Pure aggregation over the full submission list. The caller supplies
//! "now"; its timezone decides where calendar days begin.

use std::collections::{BTreeMap, HashSet};

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::Serialize;

use crate::domain::entities::SubmissionRecord;

/// A streak survives while the latest active day is at most this many
/// days before today.
pub const STREAK_GRACE_DAYS: i64 = 2;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionStats {
    pub total_submissions: usize,
    pub accepted_submissions: usize,
    /// Distinct problem URLs
    pub unique_problems: usize,
    /// Distinct handles; devices without one share a single bucket
    pub unique_users: usize,
    pub languages: BTreeMap<String, usize>,
    /// Keyed by status label
    pub status_counts: BTreeMap<String, usize>,
    /// Percentage in [0, 100]
    pub success_rate: f64,
    pub active_streak: u32,
}

impl SubmissionStats {
    pub fn compute<Tz: TimeZone>(records: &[SubmissionRecord], now: &DateTime<Tz>) -> Self {
        let mut stats = SubmissionStats {
            total_submissions: records.len(),
            ..Self::default()
        };

        let mut problems = HashSet::new();
        let mut users = HashSet::new();

        for record in records {
            let submission = &record.submission;
            let status = submission.status();

            if status.is_accepted() {
                stats.accepted_submissions += 1;
            }
            problems.insert(submission.problem_url.as_str());
            users.insert(record.handle());

            *stats
                .languages
                .entry(submission.code_language.clone())
                .or_insert(0) += 1;
            *stats
                .status_counts
                .entry(status.label().to_string())
                .or_insert(0) += 1;
        }

        stats.unique_problems = problems.len();
        stats.unique_users = users.len();
        stats.success_rate = success_rate(stats.accepted_submissions, stats.total_submissions);
        stats.active_streak = active_streak(
            records.iter().map(|record| record.submission.created_at),
            now,
        );

        stats
    }
}

/// accepted / total as a percentage, 0 for an empty list
pub fn success_rate(accepted: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    accepted as f64 / total as f64 * 100.0
}

/// Consecutive active calendar days, anchored at the latest one
///
/// Returns 0 when there is no activity or when the latest active day lies
/// more than [`STREAK_GRACE_DAYS`] before today. Otherwise counts distinct
/// days backwards from the latest until the first gap.
pub fn active_streak<Tz, I>(timestamps: I, now: &DateTime<Tz>) -> u32
where
    Tz: TimeZone,
    I: IntoIterator<Item = DateTime<Utc>>,
{
    let tz = now.timezone();
    let today = now.date_naive();

    let mut days: Vec<NaiveDate> = timestamps
        .into_iter()
        .map(|at| at.with_timezone(&tz).date_naive())
        .collect();
    days.sort_unstable_by(|a, b| b.cmp(a));
    days.dedup();

    let Some(&latest) = days.first() else {
        return 0;
    };

    if (today - latest).num_days() > STREAK_GRACE_DAYS {
        return 0;
    }

    let run = days
        .windows(2)
        .take_while(|pair| (pair[0] - pair[1]).num_days() == 1)
        .count();

    (run + 1) as u32
}
