//! Domain Entities
//!
//! A `Device` is the identity the browser extension reports from (one per
//! network address). A `Submission` is a single recorded code submission.
//! Neither is updated or deleted after creation.

use chrono::{DateTime, Utc};
use kernel::id::{DeviceId, SubmissionId};

use crate::domain::value_objects::{SubmissionStatus, UNKNOWN_USER};

/// Device entity: geolocation and client snapshot taken at first sight
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
    pub id: DeviceId,
    /// Codeforces handle, when the extension knows it
    pub handle: Option<String>,
    /// Distinguishing key; one device per address
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

impl Device {
    pub fn from_new(new: NewDevice, created_at: DateTime<Utc>) -> Self {
        Self {
            id: DeviceId::new(),
            handle: new.handle,
            ip: new.ip,
            city: new.city,
            region: new.region,
            country: new.country,
            org: new.org,
            postal: new.postal,
            timezone: new.timezone,
            browser: new.browser,
            theme: new.theme,
            ui: new.ui,
            created_at,
        }
    }
}

/// Device data as reported with a submission
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewDevice {
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
}

/// Submission entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub id: SubmissionId,
    /// Verdict text exactly as reported
    pub status: String,
    pub problem_name: Option<String>,
    pub problem_url: String,
    pub code: String,
    pub code_language: String,
    pub created_at: DateTime<Utc>,
    pub device_id: DeviceId,
}

impl Submission {
    pub fn from_new(new: NewSubmission, device_id: DeviceId, created_at: DateTime<Utc>) -> Self {
        Self {
            id: SubmissionId::new(),
            status: new.status,
            problem_name: new.problem_name,
            problem_url: new.problem_url,
            code: new.code,
            code_language: new.code_language,
            created_at,
            device_id,
        }
    }

    pub fn status(&self) -> SubmissionStatus {
        SubmissionStatus::parse(&self.status)
    }
}

/// Validated submission waiting to be stored
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewSubmission {
    pub status: String,
    pub problem_name: Option<String>,
    pub problem_url: String,
    pub code: String,
    pub code_language: String,
}

/// Submission joined with its device
///
/// `device` is `None` only for a dangling reference; such records are
/// attributed to [`UNKNOWN_USER`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRecord {
    pub submission: Submission,
    pub device: Option<Device>,
}

impl SubmissionRecord {
    pub fn handle(&self) -> Option<&str> {
        self.device.as_ref()?.handle.as_deref()
    }

    /// Handle as shown in the user selector
    pub fn display_handle(&self) -> &str {
        self.handle().unwrap_or(UNKNOWN_USER)
    }

    pub fn city(&self) -> &str {
        self.device.as_ref().map_or("", |d| d.city.as_str())
    }

    pub fn region(&self) -> &str {
        self.device.as_ref().map_or("", |d| d.region.as_str())
    }

    pub fn country(&self) -> &str {
        self.device.as_ref().map_or("", |d| d.country.as_str())
    }
}

/// Source code of one submission, served on demand
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionCode {
    pub id: SubmissionId,
    pub code: String,
    pub code_language: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn device(handle: Option<&str>) -> Device {
        Device::from_new(
            NewDevice {
                handle: handle.map(str::to_string),
                ip: "203.0.113.7".to_string(),
                city: "Dhaka".to_string(),
                ..NewDevice::default()
            },
            Utc::now(),
        )
    }

    fn record(device: Option<Device>) -> SubmissionRecord {
        let device_id = device.as_ref().map_or_else(DeviceId::new, |d| d.id);
        SubmissionRecord {
            submission: Submission::from_new(
                NewSubmission {
                    status: "Wrong answer on test 2".to_string(),
                    problem_url: "https://codeforces.com/contest/1/problem/A".to_string(),
                    code: "int main() {}".to_string(),
                    code_language: "C++17".to_string(),
                    ..NewSubmission::default()
                },
                device_id,
                Utc::now(),
            ),
            device,
        }
    }

    #[test]
    fn test_status_is_parsed_from_raw_text() {
        let record = record(None);
        assert_eq!(record.submission.status(), SubmissionStatus::WrongAnswer);
        assert_eq!(record.submission.status, "Wrong answer on test 2");
    }

    #[test]
    fn test_display_handle() {
        assert_eq!(record(Some(device(Some("tourist")))).display_handle(), "tourist");
        assert_eq!(record(Some(device(None))).display_handle(), UNKNOWN_USER);
        assert_eq!(record(None).display_handle(), UNKNOWN_USER);
    }

    #[test]
    fn test_dangling_device_degrades_to_empty_fields() {
        let record = record(None);
        assert_eq!(record.handle(), None);
        assert_eq!(record.city(), "");
        assert_eq!(record.region(), "");
        assert_eq!(record.country(), "");
    }

    #[test]
    fn test_new_ids_are_distinct() {
        let a = device(None);
        let b = device(None);
        assert_ne!(a.id, b.id);
    }
}
