//! PostgreSQL-backed store, delegating to the domain model queries.

use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domains::application::models::{JobApplication, NewJobApplication};
use crate::domains::blog::models::Blog;
use crate::domains::job::models::{Job, NewJob};
use crate::domains::user::models::{NewUser, User};
use crate::kernel::store::BaseStore;

/// Store implementation over a shared connection pool
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BaseStore for PgStore {
    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        User::find_by_email(email, &self.pool).await
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        User::find_all(&self.pool).await
    }

    async fn insert_user(&self, new_user: &NewUser) -> Result<Uuid> {
        User::insert(new_user, &self.pool).await
    }

    async fn delete_user(&self, id: Uuid) -> Result<bool> {
        User::delete_by_id(id, &self.pool).await
    }

    async fn list_jobs(&self, hr_email: Option<&str>) -> Result<Vec<Job>> {
        Job::find_all(hr_email, &self.pool).await
    }

    async fn insert_job(&self, new_job: &NewJob) -> Result<Uuid> {
        Job::insert(new_job, &self.pool).await
    }

    async fn find_job(&self, id: Uuid) -> Result<Option<Job>> {
        Job::find_by_id(id, &self.pool).await
    }

    async fn increment_applicants(&self, job_id: Uuid) -> Result<bool> {
        Job::increment_applicants(job_id, &self.pool).await
    }

    async fn insert_application(&self, new_application: &NewJobApplication) -> Result<Uuid> {
        JobApplication::insert(new_application, &self.pool).await
    }

    async fn applications_by_applicant(&self, email: &str) -> Result<Vec<JobApplication>> {
        JobApplication::find_by_applicant(email, &self.pool).await
    }

    async fn applications_by_job(&self, job_id: Uuid) -> Result<Vec<JobApplication>> {
        JobApplication::find_by_job(job_id, &self.pool).await
    }

    async fn delete_application(&self, id: Uuid) -> Result<bool> {
        JobApplication::delete_by_id(id, &self.pool).await
    }

    async fn set_application_status(&self, id: Uuid, status: &str) -> Result<bool> {
        JobApplication::set_status(id, status, &self.pool).await
    }

    async fn list_blogs(&self) -> Result<Vec<Blog>> {
        Blog::find_all(&self.pool).await
    }
}
