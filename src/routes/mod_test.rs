use axum::body::Body;
use axum::http::{Method, Request, header};
use axum::response::Response;
use http_body_util::BodyExt;
use tower::ServiceExt;

use super::*;
use crate::config::GateConfig;
use crate::session::SessionStore;
use crate::state::test_helpers::test_app_state;

async fn send_to(state: AppState, request: Request<Body>) -> Response {
    app(state).oneshot(request).await.unwrap()
}

async fn send(request: Request<Body>) -> Response {
    send_to(test_app_state(), request).await
}

fn get_request(path: &str, store: &SessionStore) -> Request<Body> {
    let mut builder = Request::builder().uri(path);
    let cookies = store.cookie_header();
    if !cookies.is_empty() {
        builder = builder.header(header::COOKIE, cookies);
    }
    builder.body(Body::empty()).unwrap()
}

async fn get_with(path: &str, store: &SessionStore) -> Response {
    send(get_request(path, store)).await
}

fn signed_in() -> SessionStore {
    let mut store = SessionStore::new(false);
    store.set("auth_token", "abc123", 1);
    store
}

fn signin_state() -> AppState {
    let mut config = GateConfig::default();
    config.paths.login = "/signin".into();
    AppState::new(config).unwrap()
}

async fn body_string(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn location(response: &Response) -> Option<&str> {
    response.headers().get(header::LOCATION).and_then(|v| v.to_str().ok())
}

fn absorb_set_cookies(store: &mut SessionStore, response: &Response) {
    for value in response.headers().get_all(header::SET_COOKIE) {
        store.accept_set_cookie(value.to_str().unwrap());
    }
}

fn login_request(token: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/auth/session")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::json!({ "token": token }).to_string()))
        .unwrap()
}

// =============================================================================
// guard over the full router
// =============================================================================

#[tokio::test]
async fn anonymous_dashboard_redirects_to_login() {
    let res = get_with("/dashboard", &SessionStore::new(false)).await;
    assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&res), Some("/login"));
}

#[tokio::test]
async fn anonymous_login_renders_page() {
    let res = get_with("/login", &SessionStore::new(false)).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = body_string(res).await;
    assert!(body.contains("<h1>Sign in</h1>"));
}

#[tokio::test]
async fn authenticated_login_redirects_home() {
    let mut store = SessionStore::new(false);
    store.set("auth_token", "abc123", 1);
    let res = get_with("/login", &store).await;
    assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&res), Some("/"));
}

#[tokio::test]
async fn authenticated_pages_render_with_titles() {
    let mut store = SessionStore::new(false);
    store.set("auth_token", "abc123", 1);
    for (path, title) in [("/", "Dashboard"), ("/reservations", "Reservations"), ("/analytics/weekly", "Analytics")] {
        let res = get_with(path, &store).await;
        assert_eq!(res.status(), StatusCode::OK, "path {path}");
        assert!(body_string(res).await.contains(&format!("<h1>{title}</h1>")), "path {path}");
    }
}

#[tokio::test]
async fn authenticated_unknown_page_is_404() {
    let mut store = SessionStore::new(false);
    store.set("auth_token", "abc123", 1);
    let res = get_with("/settings", &store).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn notice_query_renders_banner() {
    let res = get_with("/login?error=Session%20expired", &SessionStore::new(false)).await;
    let body = body_string(res).await;
    assert!(body.contains("role=\"alert\">Session expired</div>"), "got {body}");
}

#[tokio::test]
async fn excluded_image_is_never_redirected() {
    let res = get_with("/_next/image/logo.png", &SessionStore::new(false)).await;
    assert_ne!(res.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&res), None);
}

#[tokio::test]
async fn missing_static_asset_is_404_not_redirect() {
    let res = get_with("/_next/static/chunks/missing.js", &SessionStore::new(false)).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn excluded_png_under_section_is_404_without_page() {
    for store in [SessionStore::new(false), signed_in()] {
        let res = get_with("/finance/report.png", &store).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert_eq!(location(&res), None);
        assert!(!body_string(res).await.contains("<h1>Finance</h1>"));
    }
}

#[tokio::test]
async fn api_path_under_section_is_404_without_page() {
    for store in [SessionStore::new(false), signed_in()] {
        let res = get_with("/finance/api/x", &store).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert_eq!(location(&res), None);
        assert!(!body_string(res).await.contains("<h1>Finance</h1>"));
    }
}

#[tokio::test]
async fn next_path_outside_static_is_404_without_page() {
    let res = get_with("/_next/data/build/index.json", &signed_in()).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert!(!body_string(res).await.contains("<h1>"));
}

// =============================================================================
// configured login path
// =============================================================================

#[tokio::test]
async fn configured_login_path_renders_sign_in() {
    let res = send_to(signin_state(), get_request("/signin", &SessionStore::new(false))).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(body_string(res).await.contains("<h1>Sign in</h1>"));
}

#[tokio::test]
async fn default_login_path_is_not_a_page_when_reconfigured() {
    let res = send_to(signin_state(), get_request("/login", &signed_in())).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert!(!body_string(res).await.contains("Sign in"));

    let res = send_to(signin_state(), get_request("/login", &SessionStore::new(false))).await;
    assert_eq!(location(&res), Some("/signin"));
}

#[tokio::test]
async fn healthz_is_public() {
    let res = get_with("/api/healthz", &SessionStore::new(false)).await;
    assert_eq!(res.status(), StatusCode::OK);
}

// =============================================================================
// session endpoints
// =============================================================================

#[tokio::test]
async fn login_sets_cookie_then_guard_lets_user_in() {
    let mut store = SessionStore::new(false);

    let res = send(login_request("tok1")).await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    absorb_set_cookies(&mut store, &res);
    assert_eq!(store.get("auth_token").as_deref(), Some("tok1"));

    let res = get_with("/finance", &store).await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = get_with("/login", &store).await;
    assert_eq!(location(&res), Some("/"));
}

#[tokio::test]
async fn login_cookie_wire_format() {
    let res = send(login_request("tok1")).await;
    let set_cookie = res.headers().get(header::SET_COOKIE).unwrap().to_str().unwrap();
    assert!(set_cookie.starts_with("auth_token=tok1"), "got {set_cookie}");
    assert!(set_cookie.contains("Path=/"), "got {set_cookie}");
    assert!(set_cookie.contains("SameSite=Lax"), "got {set_cookie}");
    assert!(set_cookie.contains("Expires="), "got {set_cookie}");
}

#[tokio::test]
async fn login_stores_token_unmodified() {
    let res = send(login_request(" tok1 ")).await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    let set_cookie = res.headers().get(header::SET_COOKIE).unwrap().to_str().unwrap();
    assert!(set_cookie.starts_with("auth_token=%20tok1%20;"), "got {set_cookie}");

    let mut store = SessionStore::new(false);
    absorb_set_cookies(&mut store, &res);
    assert_eq!(store.get("auth_token").as_deref(), Some(" tok1 "));
}

#[tokio::test]
async fn login_rejects_blank_token() {
    let res = send(login_request("   ")).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert!(res.headers().get(header::SET_COOKIE).is_none());
}

#[tokio::test]
async fn logout_clears_cookie_then_guard_redirects() {
    let mut store = SessionStore::new(false);
    store.set("auth_token", "tok1", 1);

    let request = Request::builder()
        .method(Method::DELETE)
        .uri("/api/auth/session")
        .header(header::COOKIE, store.cookie_header())
        .body(Body::empty())
        .unwrap();
    let res = send(request).await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    absorb_set_cookies(&mut store, &res);
    assert_eq!(store.get("auth_token"), None);

    let res = get_with("/dashboard", &store).await;
    assert_eq!(location(&res), Some("/login"));
}

#[tokio::test]
async fn status_reports_token_presence() {
    let mut store = SessionStore::new(false);
    let res = get_with("/api/auth/session", &store).await;
    let status: auth::SessionStatus = serde_json::from_str(&body_string(res).await).unwrap();
    assert_eq!(status, auth::SessionStatus { authenticated: false });

    store.set("auth_token", "tok1", 1);
    let res = get_with("/api/auth/session", &store).await;
    let status: auth::SessionStatus = serde_json::from_str(&body_string(res).await).unwrap();
    assert_eq!(status, auth::SessionStatus { authenticated: true });
}
