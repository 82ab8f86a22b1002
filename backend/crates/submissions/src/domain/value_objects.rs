//! Domain Value Objects
//!
//! Closed vocabularies of the submission domain: verdict statuses with
//! their display table, and the two dashboard filter inputs.

use serde::Serialize;
use std::fmt;

/// Label shown for submissions whose device has no Codeforces handle
pub const UNKNOWN_USER: &str = "Unknown";

/// Selector value meaning "do not filter by user"
pub const ALL_USERS: &str = "All Users";

/// Codeforces verdict, as far as the dashboard distinguishes them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum SubmissionStatus {
    Submitted,
    CompilationError,
    TimeLimitExceeded,
    MemoryLimitExceeded,
    RuntimeError,
    WrongAnswer,
    Accepted,
    /// Empty or unrecognised verdict text
    Unknown,
}

/// How a status is rendered by the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusDisplay {
    pub label: &'static str,
    pub short_name: &'static str,
    pub color: &'static str,
    /// lucide icon name
    pub icon: &'static str,
}

const fn display(
    label: &'static str,
    short_name: &'static str,
    color: &'static str,
    icon: &'static str,
) -> StatusDisplay {
    StatusDisplay {
        label,
        short_name,
        color,
        icon,
    }
}

/// Indexed by `SubmissionStatus as usize`
static STATUS_TABLE: [StatusDisplay; 8] = [
    display("Submitted", "SUB", "blue", "send"),
    display("Compilation Error", "CE", "gray", "code-2"),
    display("Time Limit Exceeded", "TLE", "yellow", "clock"),
    display("Memory Limit Exceeded", "MLE", "orange", "database"),
    display("Runtime Error", "RE", "purple", "alert-triangle"),
    display("Wrong Answer", "WA", "red", "x-circle"),
    display("Accepted", "AC", "green", "check-circle"),
    display("Unknown", "?", "slate", "help-circle"),
];

impl SubmissionStatus {
    pub const ALL: [SubmissionStatus; 8] = [
        SubmissionStatus::Submitted,
        SubmissionStatus::CompilationError,
        SubmissionStatus::TimeLimitExceeded,
        SubmissionStatus::MemoryLimitExceeded,
        SubmissionStatus::RuntimeError,
        SubmissionStatus::WrongAnswer,
        SubmissionStatus::Accepted,
        SubmissionStatus::Unknown,
    ];

    /// Interpret verdict text reported by the extension
    ///
    /// Case-insensitive; Codeforces appends the failing test
    /// ("Wrong answer on test 3"), so only the leading words are compared.
    pub fn parse(raw: &str) -> Self {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() {
            return SubmissionStatus::Unknown;
        }

        Self::ALL
            .into_iter()
            .filter(|status| *status != SubmissionStatus::Unknown)
            .find(|status| normalized.starts_with(&status.label().to_lowercase()))
            .unwrap_or(SubmissionStatus::Unknown)
    }

    #[inline]
    pub fn display(&self) -> &'static StatusDisplay {
        &STATUS_TABLE[*self as usize]
    }

    #[inline]
    pub fn label(&self) -> &'static str {
        self.display().label
    }

    #[inline]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, SubmissionStatus::Accepted)
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Free-text dashboard search, normalized once
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `field` is lower-cased before comparing
    pub fn matches(&self, field: &str) -> bool {
        field.to_lowercase().contains(&self.0)
    }
}

/// User selector of the dashboard
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UserFilter {
    #[default]
    All,
    /// Exact, case-sensitive display handle
    Handle(String),
}

impl UserFilter {
    /// Absent, blank and the "All Users" sentinel all mean no filtering
    pub fn from_param(param: Option<&str>) -> Self {
        match param.map(str::trim) {
            None | Some("") | Some(ALL_USERS) => UserFilter::All,
            Some(handle) => UserFilter::Handle(handle.to_string()),
        }
    }

    pub fn accepts(&self, display_handle: &str) -> bool {
        match self {
            UserFilter::All => true,
            UserFilter::Handle(handle) => handle == display_handle,
        }
    }
}
