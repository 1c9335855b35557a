use axum::{extract::State, http::StatusCode, response::Redirect, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use tracing::{info, warn};

use crate::auth::{verify_access_token, SESSION_COOKIE};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SessionRequest {
    pub access_token: String,
}

/// POST /auth/session
///
/// Called by the callback page with the token from the provider redirect.
pub async fn handle_create_session(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<SessionRequest>,
) -> Result<(CookieJar, StatusCode), AppError> {
    let claims = verify_access_token(&request.access_token, &state.config).map_err(|e| {
        warn!("Rejected session token: {e}");
        AppError::Unauthorized
    })?;

    info!("Session established for user {}", claims.sub);

    let cookie = Cookie::build((SESSION_COOKIE, request.access_token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(state.config.app_url.starts_with("https://"));

    Ok((jar.add(cookie), StatusCode::NO_CONTENT))
}

/// POST /auth/logout
pub async fn handle_logout(jar: CookieJar) -> (CookieJar, Redirect) {
    let jar = jar.remove(Cookie::build(SESSION_COOKIE).path("/"));
    (jar, Redirect::to("/login"))
}
