//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    middleware,
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::domains::auth::JwtService;
use crate::kernel::BaseStore;
use crate::server::middleware::require_auth;
use crate::server::routes::{
    create_application, create_job, create_user, delete_application, delete_user, get_job,
    get_user_by_email, health_handler, issue_token, list_applications_for_job, list_blogs,
    list_jobs, list_my_applications, list_users, logout, root_handler, update_application_status,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn BaseStore>,
    pub jwt_service: Arc<JwtService>,
    pub cookie_secure: bool,
}

/// Build the Axum application router
///
/// The store and token service are injected so tests can run the real
/// router against the in-memory double.
pub fn build_app(
    store: Arc<dyn BaseStore>,
    jwt_service: Arc<JwtService>,
    cookie_secure: bool,
    allowed_origins: Vec<String>,
) -> Router {
    let app_state = AppState {
        store,
        jwt_service: jwt_service.clone(),
        cookie_secure,
    };

    // Cookie credentials only cross the configured origins
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([CONTENT_TYPE]);

    let jwt_service_for_gate = jwt_service.clone();

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        // Users
        .route("/users", post(create_user).get(list_users))
        // GET treats the segment as an email, DELETE as an id
        .route("/users/:id", get(get_user_by_email).delete(delete_user))
        // Token issue / revoke
        .route("/jwt", post(issue_token))
        .route("/logout", post(logout))
        // Jobs
        .route("/jobs", get(list_jobs).post(create_job))
        .route("/jobs/:id", get(get_job))
        // Job applications
        .route("/job-applications", post(create_application))
        .route(
            "/job-application",
            get(list_my_applications).route_layer(middleware::from_fn(move |req, next| {
                require_auth(jwt_service_for_gate.clone(), req, next)
            })),
        )
        .route(
            "/job-application/jobs/:job_id",
            get(list_applications_for_job),
        )
        .route(
            "/job-application/:id",
            delete(delete_application).patch(update_application_status),
        )
        // Blogs
        .route("/blogs", get(list_blogs))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
