use axum::extract::Extension;
use axum::Json;
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::Serialize;

use crate::common::ApiError;
use crate::domains::auth::IdentityClaim;
use crate::server::app::AppState;
use crate::server::middleware::TOKEN_COOKIE;

#[derive(Serialize)]
pub struct TokenResponse {
    success: bool,
    token: String,
}

/// POST /jwt - sign the caller's identity claim and set it as a cookie.
///
/// The raw token is also returned in the body so non-cookie clients can
/// authenticate; that deliberately weakens the HTTP-only isolation.
pub async fn issue_token(
    Extension(state): Extension<AppState>,
    jar: CookieJar,
    Json(identity): Json<IdentityClaim>,
) -> Result<(CookieJar, Json<TokenResponse>), ApiError> {
    let token = state.jwt_service.create_token(identity)?;

    let cookie = Cookie::build((TOKEN_COOKIE, token.clone()))
        .http_only(true)
        .secure(state.cookie_secure)
        .path("/")
        .build();

    Ok((
        jar.add(cookie),
        Json(TokenResponse {
            success: true,
            token,
        }),
    ))
}

#[derive(Serialize)]
pub struct LogoutResponse {
    success: bool,
    message: String,
}

/// POST /logout - clear the identity cookie.
///
/// Tokens are stateless: one issued before logout stays valid until its
/// natural expiry. Logout only removes the cookie copy.
pub async fn logout(jar: CookieJar) -> (CookieJar, Json<LogoutResponse>) {
    let cookie = Cookie::build(TOKEN_COOKIE).path("/").build();

    (
        jar.remove(cookie),
        Json(LogoutResponse {
            success: true,
            message: "Logged out successfully".to_string(),
        }),
    )
}
