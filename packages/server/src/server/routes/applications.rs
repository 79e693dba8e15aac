use anyhow::Context;
use axum::extract::{Extension, Path, Query};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::common::ApiError;
use crate::domains::application::models::{
    EnrichedApplication, JobApplication, JobDetails, NewJobApplication,
};
use crate::server::app::AppState;
use crate::server::middleware::AuthUser;
use crate::server::routes::InsertResponse;

/// POST /job-applications - create an application and bump the parent
/// job's applicant counter.
///
/// The counter bump is an atomic store-level increment. A missing parent
/// job skips the bump rather than failing the creation: the job reference
/// is weak, and an application against a just-deleted posting is still
/// data worth keeping.
pub async fn create_application(
    Extension(state): Extension<AppState>,
    Json(new_application): Json<NewJobApplication>,
) -> Result<Json<InsertResponse>, ApiError> {
    let inserted_id = state.store.insert_application(&new_application).await?;

    let bumped = state
        .store
        .increment_applicants(new_application.job_id)
        .await?;
    if !bumped {
        warn!(
            job_id = %new_application.job_id,
            "Referenced job missing, skipping applicant count bump"
        );
    }

    Ok(Json(InsertResponse {
        success: true,
        inserted_id: Some(inserted_id),
    }))
}

#[derive(Deserialize)]
pub struct ApplicationsQuery {
    pub email: String,
}

/// GET /job-application?email= - list the caller's applications, each
/// enriched with display fields from its referenced job.
///
/// Runs behind the token gate; the gate only authenticates. The ownership
/// decision is made here: the claim's email must match the requested one.
/// A missing job leaves the enrichment fields unset rather than failing
/// the whole listing.
pub async fn list_my_applications(
    Extension(state): Extension<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Query(query): Query<ApplicationsQuery>,
) -> Result<Json<Vec<EnrichedApplication>>, ApiError> {
    if auth_user.email != query.email {
        return Err(ApiError::Forbidden);
    }

    let applications = state.store.applications_by_applicant(&query.email).await?;

    let mut enriched = Vec::with_capacity(applications.len());
    for application in applications {
        let job = state.store.find_job(application.job_id).await?;
        enriched.push(EnrichedApplication {
            job: job.as_ref().map(JobDetails::from),
            application,
        });
    }

    Ok(Json(enriched))
}

/// GET /job-application/jobs/:jobId - list applications for a job
pub async fn list_applications_for_job(
    Extension(state): Extension<AppState>,
    Path(job_id): Path<String>,
) -> Result<Json<Vec<JobApplication>>, ApiError> {
    let job_id: Uuid = job_id.parse().context("Invalid job id")?;

    Ok(Json(state.store.applications_by_job(job_id).await?))
}

#[derive(Serialize)]
pub struct DeleteApplicationResponse {
    success: bool,
    message: String,
}

/// DELETE /job-application/:id - delete an application.
///
/// A miss is a soft result, not an error.
pub async fn delete_application(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteApplicationResponse>, ApiError> {
    let id: Uuid = id.parse().context("Invalid application id")?;

    let deleted = state.store.delete_application(id).await?;

    let response = if deleted {
        DeleteApplicationResponse {
            success: true,
            message: "Application deleted".to_string(),
        }
    } else {
        DeleteApplicationResponse {
            success: false,
            message: "No application found to delete".to_string(),
        }
    };

    Ok(Json(response))
}

#[derive(Deserialize)]
pub struct StatusUpdate {
    pub status: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusResponse {
    success: bool,
    modified_count: u64,
}

/// PATCH /job-application/:id - update the application status.
///
/// Status values are caller-defined strings; the server stores them as-is.
pub async fn update_application_status(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
    Json(update): Json<StatusUpdate>,
) -> Result<Json<UpdateStatusResponse>, ApiError> {
    let id: Uuid = id.parse().context("Invalid application id")?;

    let modified = state.store.set_application_status(id, &update.status).await?;

    Ok(Json(UpdateStatusResponse {
        success: true,
        modified_count: modified as u64,
    }))
}
