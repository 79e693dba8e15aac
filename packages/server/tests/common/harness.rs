use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, Response, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use server_core::domains::auth::{IdentityClaim, JwtService};
use server_core::kernel::testing::InMemoryStore;
use server_core::server::build_app;

pub const TEST_SECRET: &str = "test_secret_key";

/// Full router wired against the in-memory store.
pub struct TestHarness {
    pub app: Router,
    pub store: Arc<InMemoryStore>,
    pub jwt_service: Arc<JwtService>,
}

impl TestHarness {
    pub fn new() -> Self {
        let store = Arc::new(InMemoryStore::default());
        let jwt_service = Arc::new(JwtService::new(TEST_SECRET));
        let app = build_app(
            store.clone(),
            jwt_service.clone(),
            false,
            vec!["http://localhost:5173".to_string()],
        );

        Self {
            app,
            store,
            jwt_service,
        }
    }

    /// Issue a token for an email, exactly as POST /jwt would
    pub fn token_for(&self, email: &str) -> String {
        self.jwt_service
            .create_token(IdentityClaim {
                email: email.to_string(),
                extra: serde_json::Map::new(),
            })
            .unwrap()
    }

    /// Cookie header value carrying a fresh token for an email
    pub fn cookie_for(&self, email: &str) -> String {
        format!("token={}", self.token_for(email))
    }

    /// Send a request through the router and return the raw response
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        cookie: Option<&str>,
        body: Option<Value>,
    ) -> Response<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }

        let request = match body {
            Some(value) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(value.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        self.app.clone().oneshot(request).await.unwrap()
    }

    /// Send a request and decode the JSON body
    pub async fn send_json(
        &self,
        method: Method,
        uri: &str,
        cookie: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        response_json(self.send(method, uri, cookie, body).await).await
    }
}

/// Decode a response body as JSON (null for an empty body)
pub async fn response_json(response: Response<Body>) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, value)
}
