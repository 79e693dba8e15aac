// Trait definition for dependency injection
//
// This is an INFRASTRUCTURE seam only - ownership checks, idempotence
// rules and the join-on-read live in the handlers that call it.

use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use crate::domains::application::models::{JobApplication, NewJobApplication};
use crate::domains::blog::models::Blog;
use crate::domains::job::models::{Job, NewJob};
use crate::domains::user::models::{NewUser, User};

/// Persistence operations the HTTP handlers depend on.
///
/// Held as `Arc<dyn BaseStore>` in app state so tests can swap in the
/// in-memory double from [`crate::kernel::testing`].
#[async_trait]
pub trait BaseStore: Send + Sync {
    /// Cheap reachability probe for the health endpoint
    async fn ping(&self) -> Result<()>;

    // Users
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>>;
    async fn list_users(&self) -> Result<Vec<User>>;
    async fn insert_user(&self, new_user: &NewUser) -> Result<Uuid>;
    async fn delete_user(&self, id: Uuid) -> Result<bool>;

    // Jobs
    async fn list_jobs(&self, hr_email: Option<&str>) -> Result<Vec<Job>>;
    async fn insert_job(&self, new_job: &NewJob) -> Result<Uuid>;
    async fn find_job(&self, id: Uuid) -> Result<Option<Job>>;

    /// Atomic applicants_count bump. Returns false when the job is gone.
    async fn increment_applicants(&self, job_id: Uuid) -> Result<bool>;

    // Job applications
    async fn insert_application(&self, new_application: &NewJobApplication) -> Result<Uuid>;
    async fn applications_by_applicant(&self, email: &str) -> Result<Vec<JobApplication>>;
    async fn applications_by_job(&self, job_id: Uuid) -> Result<Vec<JobApplication>>;
    async fn delete_application(&self, id: Uuid) -> Result<bool>;
    async fn set_application_status(&self, id: Uuid, status: &str) -> Result<bool>;

    // Blogs
    async fn list_blogs(&self) -> Result<Vec<Blog>>;
}
