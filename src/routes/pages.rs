//! Dashboard page shells.
//!
//! Each page renders its title from the page table and at most one notice
//! banner. Everything beyond the shell is drawn client-side.

use std::fmt::Write;

use axum::extract::{Query, State};
use axum::http::{StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};

use crate::guard::decision::is_system_path;
use crate::notice::{Notice, NoticeQuery};
use crate::pages::{Page, Section, classify};
use crate::state::AppState;

/// Fallback handler: classify the path and render the matching page.
///
/// Excluded asset paths and system paths never render a page shell, even
/// when they sit under a dashboard section.
pub async fn page(State(state): State<AppState>, uri: Uri, Query(query): Query<NoticeQuery>) -> Response {
    let path = uri.path();
    if state.exclusions.is_excluded(path) || is_system_path(path) {
        return StatusCode::NOT_FOUND.into_response();
    }
    let page = classify(path);
    let status = if page.section == Section::NotFound { StatusCode::NOT_FOUND } else { StatusCode::OK };
    (status, Html(render(page, &Notice::from_query(query)))).into_response()
}

/// Login boundary, mounted at the configured login path.
pub async fn login_page(Query(query): Query<NoticeQuery>) -> Html<String> {
    Html(render(Page::LOGIN, &Notice::from_query(query)))
}

pub(crate) fn render(page: Page, notice: &Notice) -> String {
    let mut html = String::with_capacity(512);
    let _ = write!(
        html,
        "<!doctype html><html lang=\"en\"><head><meta charset=\"utf-8\"><title>{title} | Backoffice</title></head>\
         <body data-section=\"{slug}\"><main><h1>{title}</h1>",
        title = page.title,
        slug = page.section.slug(),
    );
    if let Some(alert) = notice.alert() {
        let _ = write!(
            html,
            "<div class=\"{class}\" role=\"alert\">{message}</div>",
            class = alert.css_class(),
            message = escape_html(alert.message()),
        );
    }
    html.push_str("<div id=\"root\"></div></main></body></html>");
    html
}

pub(crate) fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
