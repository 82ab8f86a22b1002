//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use kernel::id::{DeviceId, SubmissionId};
use serde::{Deserialize, Serialize};

use crate::application::build_dashboard::DashboardView;
use crate::application::record_submission::RecordSubmissionInput;
use crate::domain::entities::{
    Device, NewDevice, NewSubmission, SubmissionCode, SubmissionRecord,
};
use crate::domain::statistics::SubmissionStats;
use crate::domain::value_objects::{StatusDisplay, SubmissionStatus};

/// Request for POST /api/usage
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageRequest {
    #[serde(default)]
    pub user_data: Option<UserDataDto>,
    #[serde(default)]
    pub code_info: Option<CodeInfoDto>,
}

/// Device snapshot reported by the extension; every field is optional on
/// the wire.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserDataDto {
    /// Codeforces handle
    #[serde(alias = "handle")]
    pub user_id: Option<String>,
    pub ip: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
    pub org: Option<String>,
    pub postal: Option<String>,
    pub timezone: Option<String>,
    pub browser: Option<String>,
    pub theme: Option<String>,
    pub ui: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CodeInfoDto {
    pub status: Option<String>,
    pub problem_name: Option<String>,
    pub problem_url: Option<String>,
    pub code: Option<String>,
    pub code_language: Option<String>,
}

impl UsageRequest {
    /// `None` when either half of the report is missing
    pub fn into_input(self) -> Option<RecordSubmissionInput> {
        let user = self.user_data?;
        let code = self.code_info?;

        Some(RecordSubmissionInput {
            device: NewDevice {
                handle: user.user_id,
                ip: user.ip.unwrap_or_default(),
                city: user.city.unwrap_or_default(),
                region: user.region.unwrap_or_default(),
                country: user.country.unwrap_or_default(),
                org: user.org.unwrap_or_default(),
                postal: user.postal.unwrap_or_default(),
                timezone: user.timezone.unwrap_or_default(),
                browser: user.browser.unwrap_or_default(),
                theme: user.theme.unwrap_or_default(),
                ui: user.ui.unwrap_or_default(),
            },
            submission: NewSubmission {
                status: code.status.unwrap_or_default(),
                problem_name: code.problem_name,
                problem_url: code.problem_url.unwrap_or_default(),
                code: code.code.unwrap_or_default(),
                code_language: code.code_language.unwrap_or_default(),
            },
        })
    }
}

/// Plain acknowledgement
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: &'static str,
}

/// Success envelope
#[derive(Debug, Clone, Serialize)]
pub struct DataResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceDto {
    pub id: DeviceId,
    pub handle: Option<String>,
    pub ip: String,
    pub city: String,
    pub region: String,
    pub country: String,
    pub org: String,
    pub postal: String,
    pub timezone: String,
    pub browser: String,
    pub theme: String,
    pub ui: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Device> for DeviceDto {
    fn from(device: &Device) -> Self {
        Self {
            id: device.id,
            handle: device.handle.clone(),
            ip: device.ip.clone(),
            city: device.city.clone(),
            region: device.region.clone(),
            country: device.country.clone(),
            org: device.org.clone(),
            postal: device.postal.clone(),
            timezone: device.timezone.clone(),
            browser: device.browser.clone(),
            theme: device.theme.clone(),
            ui: device.ui.clone(),
            created_at: device.created_at,
        }
    }
}

/// One row of the submissions table; code is fetched separately
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionDto {
    pub id: SubmissionId,
    /// Raw verdict text
    pub status: String,
    /// Label of the parsed status, key into the status table
    pub status_label: &'static str,
    pub problem_name: Option<String>,
    pub problem_url: String,
    pub code_language: String,
    pub created_at: DateTime<Utc>,
    pub user: Option<DeviceDto>,
}

impl From<&SubmissionRecord> for SubmissionDto {
    fn from(record: &SubmissionRecord) -> Self {
        let submission = &record.submission;
        Self {
            id: submission.id,
            status: submission.status.clone(),
            status_label: submission.status().label(),
            problem_name: submission.problem_name.clone(),
            problem_url: submission.problem_url.clone(),
            code_language: submission.code_language.clone(),
            created_at: submission.created_at,
            user: record.device.as_ref().map(DeviceDto::from),
        }
    }
}

/// Response data for GET /api/code
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeDto {
    pub id: SubmissionId,
    pub code: String,
    pub code_language: String,
}

impl From<SubmissionCode> for CodeDto {
    fn from(code: SubmissionCode) -> Self {
        Self {
            id: code.id,
            code: code.code,
            code_language: code.code_language,
        }
    }
}

/// Query for GET /api/code
#[derive(Debug, Clone, Deserialize)]
pub struct CodeQuery {
    #[serde(default)]
    pub id: String,
}

/// Query for GET /api/dashboard
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardParams {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub user: Option<String>,
}

/// Response data for GET /api/dashboard
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardDto {
    pub stats: SubmissionStats,
    pub submissions: Vec<SubmissionDto>,
    pub users: Vec<String>,
    pub statuses: Vec<&'static StatusDisplay>,
    pub total: usize,
}

impl From<DashboardView> for DashboardDto {
    fn from(view: DashboardView) -> Self {
        Self {
            submissions: view.submissions.iter().map(SubmissionDto::from).collect(),
            stats: view.stats,
            users: view.users,
            statuses: SubmissionStatus::ALL
                .iter()
                .map(SubmissionStatus::display)
                .collect(),
            total: view.total,
        }
    }
}
