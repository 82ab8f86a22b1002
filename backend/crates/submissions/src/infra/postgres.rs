//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use kernel::id::SubmissionId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::{
    Device, NewDevice, NewSubmission, Submission, SubmissionCode, SubmissionRecord,
};
use crate::domain::repository::SubmissionRepository;
use crate::error::SubmissionResult;

/// PostgreSQL-backed repository
#[derive(Clone)]
pub struct PgSubmissionRepository {
    pool: PgPool,
}

impl PgSubmissionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl SubmissionRepository for PgSubmissionRepository {
    async fn list_all(&self) -> SubmissionResult<Vec<SubmissionRecord>> {
        let rows = sqlx::query_as::<_, SubmissionRow>(
            r#"
            SELECT
                s.submission_id,
                s.status,
                s.problem_name,
                s.problem_url,
                s.code,
                s.code_language,
                s.created_at,
                s.device_id,
                d.device_id AS joined_device_id,
                d.handle,
                d.ip,
                d.city,
                d.region,
                d.country,
                d.org,
                d.postal,
                d.timezone,
                d.browser,
                d.theme,
                d.ui,
                d.created_at AS device_created_at
            FROM submissions s
            LEFT JOIN devices d ON d.device_id = s.device_id
            ORDER BY s.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(SubmissionRow::into_record).collect())
    }

    async fn insert(
        &self,
        submission: NewSubmission,
        device: NewDevice,
    ) -> SubmissionResult<SubmissionRecord> {
        let now = Utc::now();
        let mut tx = self.pool.begin().await?;

        // The no-op update makes RETURNING yield the existing row, so the
        // first snapshot stored for an address is kept.
        let device = sqlx::query_as::<_, DeviceRow>(
            r#"
            INSERT INTO devices (
                device_id,
                handle,
                ip,
                city,
                region,
                country,
                org,
                postal,
                timezone,
                browser,
                theme,
                ui,
                created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            ON CONFLICT (ip) DO UPDATE SET ip = EXCLUDED.ip
            RETURNING
                device_id,
                handle,
                ip,
                city,
                region,
                country,
                org,
                postal,
                timezone,
                browser,
                theme,
                ui,
                created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&device.handle)
        .bind(&device.ip)
        .bind(&device.city)
        .bind(&device.region)
        .bind(&device.country)
        .bind(&device.org)
        .bind(&device.postal)
        .bind(&device.timezone)
        .bind(&device.browser)
        .bind(&device.theme)
        .bind(&device.ui)
        .bind(now)
        .fetch_one(&mut *tx)
        .await?
        .into_device();

        let submission = Submission::from_new(submission, device.id, now);

        sqlx::query(
            r#"
            INSERT INTO submissions (
                submission_id,
                status,
                problem_name,
                problem_url,
                code,
                code_language,
                created_at,
                device_id
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(submission.id.into_uuid())
        .bind(&submission.status)
        .bind(&submission.problem_name)
        .bind(&submission.problem_url)
        .bind(&submission.code)
        .bind(&submission.code_language)
        .bind(submission.created_at)
        .bind(submission.device_id.into_uuid())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::debug!(
            submission_id = %submission.id,
            device_id = %device.id,
            "Submission row inserted"
        );

        Ok(SubmissionRecord {
            submission,
            device: Some(device),
        })
    }

    async fn find_code(&self, id: SubmissionId) -> SubmissionResult<Option<SubmissionCode>> {
        let row = sqlx::query_as::<_, CodeRow>(
            r#"
            SELECT submission_id, code, code_language
            FROM submissions
            WHERE submission_id = $1
            "#,
        )
        .bind(id.into_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(CodeRow::into_code))
    }
}

// Internal row types for sqlx mapping
#[derive(sqlx::FromRow)]
struct DeviceRow {
    device_id: Uuid,
    handle: Option<String>,
    ip: String,
    city: String,
    region: String,
    country: String,
    org: String,
    postal: String,
    timezone: String,
    browser: String,
    theme: String,
    ui: String,
    created_at: DateTime<Utc>,
}

impl DeviceRow {
    fn into_device(self) -> Device {
        Device {
            id: self.device_id.into(),
            handle: self.handle,
            ip: self.ip,
            city: self.city,
            region: self.region,
            country: self.country,
            org: self.org,
            postal: self.postal,
            timezone: self.timezone,
            browser: self.browser,
            theme: self.theme,
            ui: self.ui,
            created_at: self.created_at,
        }
    }
}

/// Submission left-joined with its device; device columns are NULL for a
/// dangling reference.
#[derive(sqlx::FromRow)]
struct SubmissionRow {
    submission_id: Uuid,
    status: String,
    problem_name: Option<String>,
    problem_url: String,
    code: String,
    code_language: String,
    created_at: DateTime<Utc>,
    device_id: Uuid,
    joined_device_id: Option<Uuid>,
    handle: Option<String>,
    ip: Option<String>,
    city: Option<String>,
    region: Option<String>,
    country: Option<String>,
    org: Option<String>,
    postal: Option<String>,
    timezone: Option<String>,
    browser: Option<String>,
    theme: Option<String>,
    ui: Option<String>,
    device_created_at: Option<DateTime<Utc>>,
}

impl SubmissionRow {
    fn into_record(self) -> SubmissionRecord {
        let device = match (self.joined_device_id, self.device_created_at) {
            (Some(id), Some(created_at)) => Some(Device {
                id: id.into(),
                handle: self.handle,
                ip: self.ip.unwrap_or_default(),
                city: self.city.unwrap_or_default(),
                region: self.region.unwrap_or_default(),
                country: self.country.unwrap_or_default(),
                org: self.org.unwrap_or_default(),
                postal: self.postal.unwrap_or_default(),
                timezone: self.timezone.unwrap_or_default(),
                browser: self.browser.unwrap_or_default(),
                theme: self.theme.unwrap_or_default(),
                ui: self.ui.unwrap_or_default(),
                created_at,
            }),
            _ => None,
        };

        SubmissionRecord {
            submission: Submission {
                id: self.submission_id.into(),
                status: self.status,
                problem_name: self.problem_name,
                problem_url: self.problem_url,
                code: self.code,
                code_language: self.code_language,
                created_at: self.created_at,
                device_id: self.device_id.into(),
            },
            device,
        }
    }
}

#[derive(sqlx::FromRow)]
struct CodeRow {
    submission_id: Uuid,
    code: String,
    code_language: String,
}

impl CodeRow {
    fn into_code(self) -> SubmissionCode {
        SubmissionCode {
            id: self.submission_id.into(),
            code: self.code,
            code_language: self.code_language,
        }
    }
}
