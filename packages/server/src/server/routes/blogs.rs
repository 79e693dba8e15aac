use axum::extract::Extension;
use axum::Json;

use crate::common::ApiError;
use crate::domains::blog::models::Blog;
use crate::server::app::AppState;

/// GET /blogs - list all blog posts
pub async fn list_blogs(
    Extension(state): Extension<AppState>,
) -> Result<Json<Vec<Blog>>, ApiError> {
    Ok(Json(state.store.list_blogs().await?))
}
