//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages, the session endpoints, and static assets share one Axum router.
//! The route guard wraps all of it, including the page fallback, so every
//! navigation is either excluded up front or gets a decision.

pub mod auth;
pub mod pages;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::guard::route_guard;
use crate::state::AppState;

/// Full application router with the guard and request tracing applied.
pub fn app(state: AppState) -> Router {
    let assets = state.config.asset_dir.clone();

    Router::new()
        .route("/api/healthz", get(healthz))
        .route("/api/auth/session", get(auth::status).post(auth::login).delete(auth::logout))
        .route(&state.config.paths.login, get(pages::login_page))
        .nest_service("/_next/static", ServeDir::new(assets.join("_next/static")))
        .route_service("/favicon.ico", ServeFile::new(assets.join("favicon.ico")))
        .fallback(pages::page)
        .layer(axum::middleware::from_fn_with_state(state.clone(), route_guard))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
