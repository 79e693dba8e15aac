use anyhow::Context;
use axum::extract::{Extension, Path, Query};
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::common::ApiError;
use crate::domains::job::models::{Job, NewJob};
use crate::server::app::AppState;
use crate::server::routes::InsertResponse;

#[derive(Deserialize)]
pub struct JobsQuery {
    pub email: Option<String>,
}

/// GET /jobs - list jobs, optionally filtered by the owning HR email
pub async fn list_jobs(
    Extension(state): Extension<AppState>,
    Query(query): Query<JobsQuery>,
) -> Result<Json<Vec<Job>>, ApiError> {
    let jobs = state.store.list_jobs(query.email.as_deref()).await?;
    Ok(Json(jobs))
}

/// POST /jobs - create a job posting
pub async fn create_job(
    Extension(state): Extension<AppState>,
    Json(new_job): Json<NewJob>,
) -> Result<Json<InsertResponse>, ApiError> {
    let inserted_id = state.store.insert_job(&new_job).await?;

    Ok(Json(InsertResponse {
        success: true,
        inserted_id: Some(inserted_id),
    }))
}

/// GET /jobs/:id - fetch one job.
///
/// A missing job is passed through as a null body, mirroring the store
/// result; NotFound is reserved for the user-by-email lookup.
pub async fn get_job(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Option<Job>>, ApiError> {
    let id: Uuid = id.parse().context("Invalid job id")?;

    Ok(Json(state.store.find_job(id).await?))
}
