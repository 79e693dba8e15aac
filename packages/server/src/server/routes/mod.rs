// HTTP route handlers, one module per resource
pub mod applications;
pub mod auth;
pub mod blogs;
pub mod health;
pub mod jobs;
pub mod users;

pub use applications::*;
pub use auth::*;
pub use blogs::*;
pub use health::*;
pub use jobs::*;
pub use users::*;

use serde::Serialize;
use uuid::Uuid;

/// Envelope returned by every insert endpoint.
///
/// `inserted_id` is null for the soft no-op cases (duplicate user email).
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertResponse {
    pub success: bool,
    pub inserted_id: Option<Uuid>,
}
