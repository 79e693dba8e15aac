//! In-memory store double for tests.
//!
//! Implements [`BaseStore`] over plain maps so the full router can be
//! exercised without a database. Extra helpers let tests reshape state
//! the API has no endpoint for (removing a job, seeding blogs).

use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domains::application::models::{JobApplication, NewJobApplication};
use crate::domains::blog::models::Blog;
use crate::domains::job::models::{Job, NewJob};
use crate::domains::user::models::{NewUser, User};
use crate::kernel::store::BaseStore;

#[derive(Default)]
pub struct InMemoryStore {
    users: RwLock<Vec<User>>,
    jobs: RwLock<HashMap<Uuid, Job>>,
    applications: RwLock<HashMap<Uuid, JobApplication>>,
    blogs: RwLock<Vec<Blog>>,
}

impl InMemoryStore {
    /// Drop a job directly, bypassing the API surface (which has no
    /// job-deletion endpoint). Used to simulate a dangling reference.
    pub async fn remove_job(&self, id: Uuid) -> bool {
        self.jobs.write().await.remove(&id).is_some()
    }

    /// Seed a blog post
    pub async fn add_blog(&self, title: &str, content: &str, author: Option<&str>) -> Uuid {
        let id = Uuid::new_v4();
        self.blogs.write().await.push(Blog {
            id,
            title: title.to_string(),
            content: content.to_string(),
            author: author.map(String::from),
            cover_image: None,
            published_at: chrono::Utc::now(),
        });
        id
    }
}

#[async_trait]
impl BaseStore for InMemoryStore {
    async fn ping(&self) -> Result<()> {
        Ok(())
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .iter()
            .find(|user| user.email == email)
            .cloned())
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        Ok(self.users.read().await.clone())
    }

    async fn insert_user(&self, new_user: &NewUser) -> Result<Uuid> {
        let id = Uuid::new_v4();
        self.users.write().await.push(User {
            id,
            email: new_user.email.clone(),
            name: new_user.name.clone(),
            photo_url: new_user.photo_url.clone(),
            created_at: chrono::Utc::now(),
        });
        Ok(id)
    }

    async fn delete_user(&self, id: Uuid) -> Result<bool> {
        let mut users = self.users.write().await;
        let before = users.len();
        users.retain(|user| user.id != id);
        Ok(users.len() < before)
    }

    async fn list_jobs(&self, hr_email: Option<&str>) -> Result<Vec<Job>> {
        let jobs = self.jobs.read().await;
        let mut result: Vec<Job> = jobs
            .values()
            .filter(|job| hr_email.map_or(true, |email| job.hr_email == email))
            .cloned()
            .collect();
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(result)
    }

    async fn insert_job(&self, new_job: &NewJob) -> Result<Uuid> {
        let id = Uuid::new_v4();
        self.jobs.write().await.insert(
            id,
            Job {
                id,
                title: new_job.title.clone(),
                location: new_job.location.clone(),
                job_type: new_job.job_type.clone(),
                category: new_job.category.clone(),
                application_deadline: new_job.application_deadline.clone(),
                salary_range: new_job.salary_range.clone(),
                description: new_job.description.clone(),
                company: new_job.company.clone(),
                company_logo: new_job.company_logo.clone(),
                requirements: new_job.requirements.clone(),
                hr_email: new_job.hr_email.clone(),
                hr_name: new_job.hr_name.clone(),
                applicants_count: 0,
                created_at: chrono::Utc::now(),
            },
        );
        Ok(id)
    }

    async fn find_job(&self, id: Uuid) -> Result<Option<Job>> {
        Ok(self.jobs.read().await.get(&id).cloned())
    }

    async fn increment_applicants(&self, job_id: Uuid) -> Result<bool> {
        let mut jobs = self.jobs.write().await;
        match jobs.get_mut(&job_id) {
            Some(job) => {
                job.applicants_count += 1;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn insert_application(&self, new_application: &NewJobApplication) -> Result<Uuid> {
        let id = Uuid::new_v4();
        self.applications.write().await.insert(
            id,
            JobApplication {
                id,
                job_id: new_application.job_id,
                applicant_email: new_application.applicant_email.clone(),
                linkedin_url: new_application.linkedin_url.clone(),
                github_url: new_application.github_url.clone(),
                resume_url: new_application.resume_url.clone(),
                status: None,
                created_at: chrono::Utc::now(),
            },
        );
        Ok(id)
    }

    async fn applications_by_applicant(&self, email: &str) -> Result<Vec<JobApplication>> {
        let applications = self.applications.read().await;
        let mut result: Vec<JobApplication> = applications
            .values()
            .filter(|application| application.applicant_email == email)
            .cloned()
            .collect();
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(result)
    }

    async fn applications_by_job(&self, job_id: Uuid) -> Result<Vec<JobApplication>> {
        let applications = self.applications.read().await;
        let mut result: Vec<JobApplication> = applications
            .values()
            .filter(|application| application.job_id == job_id)
            .cloned()
            .collect();
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(result)
    }

    async fn delete_application(&self, id: Uuid) -> Result<bool> {
        Ok(self.applications.write().await.remove(&id).is_some())
    }

    async fn set_application_status(&self, id: Uuid, status: &str) -> Result<bool> {
        let mut applications = self.applications.write().await;
        match applications.get_mut(&id) {
            Some(application) => {
                application.status = Some(status.to_string());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn list_blogs(&self) -> Result<Vec<Blog>> {
        Ok(self.blogs.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_job() -> NewJob {
        NewJob {
            title: "Backend Engineer".to_string(),
            location: "Remote".to_string(),
            job_type: "Full-Time".to_string(),
            category: None,
            application_deadline: None,
            salary_range: None,
            description: "Build the backend".to_string(),
            company: "Acme".to_string(),
            company_logo: None,
            requirements: vec!["rust".to_string()],
            hr_email: "hr@acme.com".to_string(),
            hr_name: None,
        }
    }

    #[tokio::test]
    async fn test_increment_applicants() {
        let store = InMemoryStore::default();
        let job_id = store.insert_job(&sample_job()).await.unwrap();

        assert!(store.increment_applicants(job_id).await.unwrap());
        assert!(store.increment_applicants(job_id).await.unwrap());

        let job = store.find_job(job_id).await.unwrap().unwrap();
        assert_eq!(job.applicants_count, 2);
    }

    #[tokio::test]
    async fn test_increment_applicants_missing_job() {
        let store = InMemoryStore::default();
        assert!(!store.increment_applicants(Uuid::new_v4()).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_user() {
        let store = InMemoryStore::default();
        let id = store
            .insert_user(&NewUser {
                email: "a@x.com".to_string(),
                name: None,
                photo_url: None,
            })
            .await
            .unwrap();

        assert!(store.delete_user(id).await.unwrap());
        assert!(!store.delete_user(id).await.unwrap());
        assert!(store.list_users().await.unwrap().is_empty());
    }
}
