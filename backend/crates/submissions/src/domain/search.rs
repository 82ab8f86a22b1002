//! Dashboard search and user filtering

use std::collections::BTreeSet;

use crate::domain::entities::SubmissionRecord;
use crate::domain::value_objects::{SearchQuery, UserFilter};

/// Records passing both the user filter and the free-text query
///
/// Relative order is preserved. The query matches, case-insensitively, any
/// of: problem name, handle, city, region, country.
pub fn filter_submissions<'a>(
    records: &'a [SubmissionRecord],
    query: &SearchQuery,
    user: &UserFilter,
) -> Vec<&'a SubmissionRecord> {
    records
        .iter()
        .filter(|record| user.accepts(record.display_handle()))
        .filter(|record| matches_query(record, query))
        .collect()
}

fn matches_query(record: &SubmissionRecord, query: &SearchQuery) -> bool {
    if query.is_empty() {
        return true;
    }

    let problem_name = record.submission.problem_name.as_deref().unwrap_or("");
    let handle = record.handle().unwrap_or("");

    [
        problem_name,
        handle,
        record.city(),
        record.region(),
        record.country(),
    ]
    .into_iter()
    .any(|field| query.matches(field))
}

/// Distinct display handles, sorted, for the user selector
pub fn user_options(records: &[SubmissionRecord]) -> Vec<String> {
    records
        .iter()
        .map(SubmissionRecord::display_handle)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
