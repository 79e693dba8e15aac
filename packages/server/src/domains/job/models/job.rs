use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Job posting, owned by the HR identity that created it (hr_email).
///
/// `applicants_count` is a denormalized counter maintained by
/// [`Job::increment_applicants`]; it is never written by handlers directly.
#[derive(sqlx::FromRow, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: Uuid,
    pub title: String,
    pub location: String,
    pub job_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_deadline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_range: Option<serde_json::Value>,
    pub description: String,
    pub company: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_logo: Option<String>,
    pub requirements: Vec<String>,
    pub hr_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hr_name: Option<String>,
    pub applicants_count: i64,
    pub created_at: DateTime<Utc>,
}

/// Job document accepted at creation (applicants_count starts at zero)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJob {
    pub title: String,
    pub location: String,
    pub job_type: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub application_deadline: Option<String>,
    #[serde(default)]
    pub salary_range: Option<serde_json::Value>,
    pub description: String,
    pub company: String,
    #[serde(default)]
    pub company_logo: Option<String>,
    #[serde(default)]
    pub requirements: Vec<String>,
    pub hr_email: String,
    #[serde(default)]
    pub hr_name: Option<String>,
}

impl Job {
    /// Find job by id
    pub async fn find_by_id(id: Uuid, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM jobs WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// Find all jobs, optionally filtered by the owning HR email
    pub async fn find_all(hr_email: Option<&str>, pool: &PgPool) -> Result<Vec<Self>> {
        match hr_email {
            Some(email) => sqlx::query_as::<_, Self>(
                "SELECT * FROM jobs WHERE hr_email = $1 ORDER BY created_at DESC",
            )
            .bind(email)
            .fetch_all(pool)
            .await
            .map_err(Into::into),
            None => sqlx::query_as::<_, Self>("SELECT * FROM jobs ORDER BY created_at DESC")
                .fetch_all(pool)
                .await
                .map_err(Into::into),
        }
    }

    /// Insert a new job, returning the generated id
    pub async fn insert(new_job: &NewJob, pool: &PgPool) -> Result<Uuid> {
        let row: (Uuid,) = sqlx::query_as(
            "INSERT INTO jobs (title, location, job_type, category, application_deadline, \
             salary_range, description, company, company_logo, requirements, hr_email, hr_name) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) RETURNING id",
        )
        .bind(&new_job.title)
        .bind(&new_job.location)
        .bind(&new_job.job_type)
        .bind(&new_job.category)
        .bind(&new_job.application_deadline)
        .bind(&new_job.salary_range)
        .bind(&new_job.description)
        .bind(&new_job.company)
        .bind(&new_job.company_logo)
        .bind(&new_job.requirements)
        .bind(&new_job.hr_email)
        .bind(&new_job.hr_name)
        .fetch_one(pool)
        .await?;

        Ok(row.0)
    }

    /// Atomically bump the applicant counter.
    ///
    /// A single-statement increment, so concurrent submissions cannot lose
    /// updates. Returns false when the job no longer exists.
    pub async fn increment_applicants(id: Uuid, pool: &PgPool) -> Result<bool> {
        let result =
            sqlx::query("UPDATE jobs SET applicants_count = applicants_count + 1 WHERE id = $1")
                .bind(id)
                .execute(pool)
                .await?;

        Ok(result.rows_affected() > 0)
    }
}
