//! In-memory Repository
//!
//! Backs the service when no database is configured, and the tests.
//! Contents are lost on restart.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use kernel::id::{DeviceId, SubmissionId};
use tokio::sync::RwLock;

use crate::domain::entities::{
    Device, NewDevice, NewSubmission, Submission, SubmissionCode, SubmissionRecord,
};
use crate::domain::repository::SubmissionRepository;
use crate::error::SubmissionResult;

#[derive(Default)]
struct Store {
    devices: HashMap<DeviceId, Device>,
    device_by_ip: HashMap<String, DeviceId>,
    /// Insertion order
    submissions: Vec<Submission>,
}

#[derive(Clone, Default)]
pub struct InMemorySubmissionRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemorySubmissionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    async fn insert_with_time(
        &self,
        submission: NewSubmission,
        device: NewDevice,
        at: DateTime<Utc>,
    ) -> SubmissionRecord {
        let mut store = self.store.write().await;

        let existing = store.device_by_ip.get(&device.ip).copied();
        let device_id = match existing {
            Some(id) => id,
            None => {
                let device = Device::from_new(device, at);
                let id = device.id;
                tracing::info!(device_id = %id, "Device created");
                store.device_by_ip.insert(device.ip.clone(), id);
                store.devices.insert(id, device);
                id
            }
        };

        let submission = Submission::from_new(submission, device_id, at);
        store.submissions.push(submission.clone());

        SubmissionRecord {
            device: store.devices.get(&device_id).cloned(),
            submission,
        }
    }

    /// Insert with an explicit timestamp
    #[cfg(test)]
    pub(crate) async fn insert_at(
        &self,
        submission: NewSubmission,
        device: NewDevice,
        at: DateTime<Utc>,
    ) -> SubmissionRecord {
        self.insert_with_time(submission, device, at).await
    }
}

impl SubmissionRepository for InMemorySubmissionRepository {
    async fn list_all(&self) -> SubmissionResult<Vec<SubmissionRecord>> {
        let store = self.store.read().await;

        // Reverse insertion order breaks timestamp ties newest first
        let mut records: Vec<SubmissionRecord> = store
            .submissions
            .iter()
            .rev()
            .map(|submission| SubmissionRecord {
                device: store.devices.get(&submission.device_id).cloned(),
                submission: submission.clone(),
            })
            .collect();
        records.sort_by(|a, b| b.submission.created_at.cmp(&a.submission.created_at));

        Ok(records)
    }

    async fn insert(
        &self,
        submission: NewSubmission,
        device: NewDevice,
    ) -> SubmissionResult<SubmissionRecord> {
        Ok(self.insert_with_time(submission, device, Utc::now()).await)
    }

    async fn find_code(&self, id: SubmissionId) -> SubmissionResult<Option<SubmissionCode>> {
        let store = self.store.read().await;
        Ok(store
            .submissions
            .iter()
            .find(|submission| submission.id == id)
            .map(|submission| SubmissionCode {
                id: submission.id,
                code: submission.code.clone(),
                code_language: submission.code_language.clone(),
            }))
    }
}
