use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domains::job::models::Job;

/// Job application, owned by the applicant (applicant_email).
///
/// `job_id` is a weak reference: the parent job may be deleted at any time
/// and nothing cascades. Core fields are fixed at creation; `status` is the
/// only field mutated afterwards.
#[derive(sqlx::FromRow, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobApplication {
    pub id: Uuid,
    pub job_id: Uuid,
    pub applicant_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Application document accepted at creation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJobApplication {
    pub job_id: Uuid,
    pub applicant_email: String,
    #[serde(default)]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub resume_url: Option<String>,
}

/// Display fields fanned out from the referenced job at read time
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDetails {
    pub title: String,
    pub location: String,
    pub company: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_deadline: Option<String>,
    pub job_type: String,
    pub description: String,
    pub requirements: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_range: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hr_name: Option<String>,
    pub hr_email: String,
}

impl From<&Job> for JobDetails {
    fn from(job: &Job) -> Self {
        Self {
            title: job.title.clone(),
            location: job.location.clone(),
            company: job.company.clone(),
            company_logo: job.company_logo.clone(),
            application_deadline: job.application_deadline.clone(),
            job_type: job.job_type.clone(),
            description: job.description.clone(),
            requirements: job.requirements.clone(),
            salary_range: job.salary_range.clone(),
            hr_name: job.hr_name.clone(),
            hr_email: job.hr_email.clone(),
        }
    }
}

/// Read model for the authenticated "my applications" listing.
///
/// The join happens per response; the stored application row is never
/// touched. A missing parent job leaves the extra fields out entirely.
#[derive(Debug, Clone, Serialize)]
pub struct EnrichedApplication {
    #[serde(flatten)]
    pub application: JobApplication,
    #[serde(flatten)]
    pub job: Option<JobDetails>,
}

impl JobApplication {
    /// Insert a new application, returning the generated id
    pub async fn insert(new_application: &NewJobApplication, pool: &PgPool) -> Result<Uuid> {
        let row: (Uuid,) = sqlx::query_as(
            "INSERT INTO job_applications \
             (job_id, applicant_email, linkedin_url, github_url, resume_url) \
             VALUES ($1, $2, $3, $4, $5) RETURNING id",
        )
        .bind(new_application.job_id)
        .bind(&new_application.applicant_email)
        .bind(&new_application.linkedin_url)
        .bind(&new_application.github_url)
        .bind(&new_application.resume_url)
        .fetch_one(pool)
        .await?;

        Ok(row.0)
    }

    /// Find all applications submitted by an applicant
    pub async fn find_by_applicant(email: &str, pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM job_applications WHERE applicant_email = $1 ORDER BY created_at DESC",
        )
        .bind(email)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// Find all applications for a job
    pub async fn find_by_job(job_id: Uuid, pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM job_applications WHERE job_id = $1 ORDER BY created_at DESC",
        )
        .bind(job_id)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// Delete an application by id. Returns whether a row was removed.
    pub async fn delete_by_id(id: Uuid, pool: &PgPool) -> Result<bool> {
        let result = sqlx::query("DELETE FROM job_applications WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Update the status string. Returns whether a row matched.
    pub async fn set_status(id: Uuid, status: &str, pool: &PgPool) -> Result<bool> {
        let result = sqlx::query("UPDATE job_applications SET status = $1 WHERE id = $2")
            .bind(status)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
