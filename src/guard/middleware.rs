//! Axum middleware applying the guard to each request.

use axum::extract::{Request, State};
use axum::http::{HeaderMap, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};

use super::decision::{NavigationRequest, evaluate};
use crate::session::find_cookie;
use crate::state::AppState;

/// Allow the request through or answer with a 307 redirect.
///
/// Excluded paths are passed on without a decision being made.
pub async fn route_guard(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let path = request.uri().path();
    if state.exclusions.is_excluded(path) {
        return next.run(request).await;
    }

    let has_token = token_present(request.headers(), &state.config.cookie.name);
    let decision = evaluate(&state.config.paths, &NavigationRequest { path, has_token });

    match decision.target(&state.config.paths) {
        Some(target) => {
            tracing::info!(path, redirect_to = target, decision = decision.as_str(), "route guard redirect");
            Redirect::temporary(target).into_response()
        }
        None => next.run(request).await,
    }
}

/// Whether any `Cookie` header carries a non-empty `name` entry.
pub(crate) fn token_present(headers: &HeaderMap, name: &str) -> bool {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .filter_map(|value| find_cookie(value, name))
        .any(|token| !token.is_empty())
}

#[cfg(test)]
#[path = "middleware_test.rs"]
mod tests;
