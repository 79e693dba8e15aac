use std::sync::Arc;

use axum::body::Body;
use axum::{middleware::Next, response::Response};
use axum_extra::extract::cookie::CookieJar;
use tracing::debug;

use crate::common::ApiError;
use crate::domains::auth::{Claims, JwtService};

/// Name of the cookie carrying the identity token
pub const TOKEN_COOKIE: &str = "token";

/// Authenticated identity decoded from the token cookie.
///
/// Exists only in the extensions of the request it was decoded for.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub email: String,
    pub claims: Claims,
}

/// Token gate for protected routes
///
/// Extracts the token from the cookie store, verifies it, and adds AuthUser
/// to request extensions. No cookie or a failed signature/expiry check
/// rejects the request before any data access. The gate only proves who the
/// caller signed in as; what they may access stays each handler's policy.
pub async fn require_auth(
    jwt_service: Arc<JwtService>,
    mut request: axum::http::Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let user = authenticate(&request, &jwt_service).ok_or(ApiError::Unauthorized)?;

    debug!("Authenticated user: {}", user.email);
    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}

/// Extract and verify the token cookie from a request
fn authenticate(request: &axum::http::Request<Body>, jwt_service: &JwtService) -> Option<AuthUser> {
    let jar = CookieJar::from_headers(request.headers());
    let token = jar.get(TOKEN_COOKIE)?.value().to_string();

    let claims = jwt_service.verify_token(&token).ok()?;

    Some(AuthUser {
        email: claims.email.clone(),
        claims,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::auth::IdentityClaim;

    fn token_for(jwt_service: &JwtService, email: &str) -> String {
        jwt_service
            .create_token(IdentityClaim {
                email: email.to_string(),
                extra: serde_json::Map::new(),
            })
            .unwrap()
    }

    #[test]
    fn test_valid_cookie() {
        let jwt_service = JwtService::new("test_secret");
        let token = token_for(&jwt_service, "a@x.com");

        let request = axum::http::Request::builder()
            .header("cookie", format!("token={}", token))
            .body(Body::empty())
            .unwrap();

        let user = authenticate(&request, &jwt_service);
        assert_eq!(user.unwrap().email, "a@x.com");
    }

    #[test]
    fn test_no_cookie() {
        let jwt_service = JwtService::new("test_secret");
        let request = axum::http::Request::builder().body(Body::empty()).unwrap();

        assert!(authenticate(&request, &jwt_service).is_none());
    }

    #[test]
    fn test_wrong_cookie_name() {
        let jwt_service = JwtService::new("test_secret");
        let token = token_for(&jwt_service, "a@x.com");

        let request = axum::http::Request::builder()
            .header("cookie", format!("session={}", token))
            .body(Body::empty())
            .unwrap();

        assert!(authenticate(&request, &jwt_service).is_none());
    }

    #[test]
    fn test_invalid_token() {
        let jwt_service = JwtService::new("test_secret");

        let request = axum::http::Request::builder()
            .header("cookie", "token=not_a_jwt")
            .body(Body::empty())
            .unwrap();

        assert!(authenticate(&request, &jwt_service).is_none());
    }
}
