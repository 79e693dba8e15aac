//! Integration tests for the job and blog endpoints.

mod common;

use axum::http::{Method, StatusCode};
use common::{fixtures, TestHarness};
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
async fn create_and_fetch_job() {
    let harness = TestHarness::new();

    let (status, body) = harness
        .send_json(Method::POST, "/jobs", None, Some(fixtures::job_body()))
        .await;
    assert_eq!(status, StatusCode::OK);
    let job_id = body["insertedId"].as_str().unwrap().to_string();

    let (status, job) = harness
        .send_json(Method::GET, &format!("/jobs/{}", job_id), None, None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(job["title"], json!("Backend Engineer"));
    assert_eq!(job["salaryRange"]["currency"], json!("bdt"));
    assert_eq!(job["applicantsCount"], json!(0));
}

#[tokio::test]
async fn fetch_missing_job_passes_through_as_null() {
    let harness = TestHarness::new();

    let (status, body) = harness
        .send_json(Method::GET, &format!("/jobs/{}", Uuid::new_v4()), None, None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_null());
}

#[tokio::test]
async fn list_jobs_filters_by_owner_email() {
    let harness = TestHarness::new();

    harness
        .send_json(Method::POST, "/jobs", None, Some(fixtures::job_body()))
        .await;

    let mut other = fixtures::job_body();
    other["hrEmail"] = json!("other@corp.com");
    other["title"] = json!("Data Engineer");
    harness
        .send_json(Method::POST, "/jobs", None, Some(other))
        .await;

    let (_, all) = harness.send_json(Method::GET, "/jobs", None, None).await;
    assert_eq!(all.as_array().unwrap().len(), 2);

    let (_, owned) = harness
        .send_json(Method::GET, "/jobs?email=hr@acme.com", None, None)
        .await;
    let owned = owned.as_array().unwrap();
    assert_eq!(owned.len(), 1);
    assert_eq!(owned[0]["hrEmail"], json!("hr@acme.com"));
}

#[tokio::test]
async fn list_blogs_returns_seeded_posts() {
    let harness = TestHarness::new();
    harness
        .store
        .add_blog("Hiring in 2026", "What changed this year.", Some("Dana"))
        .await;

    let (status, body) = harness.send_json(Method::GET, "/blogs", None, None).await;
    assert_eq!(status, StatusCode::OK);

    let blogs = body.as_array().unwrap();
    assert_eq!(blogs.len(), 1);
    assert_eq!(blogs[0]["title"], json!("Hiring in 2026"));
    assert_eq!(blogs[0]["author"], json!("Dana"));
}
