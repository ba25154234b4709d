//! Session cookie endpoints used by the login and logout flows.
//!
//! These only write or clear the token cookie. Credential checks belong to
//! the identity service that hands the client its token.

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::guard::middleware::token_present;
use crate::session::cookie::{removal_cookie, session_cookie};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct LoginBody {
    token: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionStatus {
    pub authenticated: bool,
}

/// `POST /api/auth/session` — store the issued token in the session cookie.
pub async fn login(State(state): State<AppState>, jar: CookieJar, Json(body): Json<LoginBody>) -> Response {
    if body.token.trim().is_empty() {
        return (StatusCode::BAD_REQUEST, "token required").into_response();
    }

    let settings = &state.config.cookie;
    let cookie = session_cookie(&settings.name, &body.token, settings.days, settings.secure, OffsetDateTime::now_utc());
    tracing::info!(cookie = %settings.name, days = settings.days, "session cookie set");
    (jar.add(cookie), StatusCode::NO_CONTENT).into_response()
}

/// `DELETE /api/auth/session` — expire the session cookie.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let settings = &state.config.cookie;
    tracing::info!(cookie = %settings.name, "session cookie cleared");
    (jar.add(removal_cookie(&settings.name, settings.secure)), StatusCode::NO_CONTENT)
}

/// `GET /api/auth/session` — report whether the request carries a token.
pub async fn status(State(state): State<AppState>, headers: HeaderMap) -> Json<SessionStatus> {
    Json(SessionStatus { authenticated: token_present(&headers, &state.config.cookie.name) })
}
