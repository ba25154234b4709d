//! Loading/error/success state handed to the page renderer.
//!
//! The dashboard shows at most one alert banner. The state travels with the
//! request as an explicit value; there is no process-wide notice store.

use serde::Deserialize;

/// Query parameters a redirect can use to raise a banner (`?error=...`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NoticeQuery {
    pub error: Option<String>,
    pub success: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notice {
    pub loading: bool,
    pub error: Option<String>,
    pub success: Option<String>,
}

/// The single banner a page shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alert<'a> {
    Error(&'a str),
    Success(&'a str),
}

impl Alert<'_> {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Error(_) => "alert alert-error",
            Self::Success(_) => "alert alert-success",
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Error(msg) | Self::Success(msg) => msg,
        }
    }
}

impl Notice {
    /// Server-rendered pages are never mid-load.
    #[must_use]
    pub fn from_query(query: NoticeQuery) -> Self {
        Self { loading: false, error: non_blank(query.error), success: non_blank(query.success) }
    }

    /// Error wins over success when both are set.
    #[must_use]
    pub fn alert(&self) -> Option<Alert<'_>> {
        if self.loading {
            return None;
        }
        self.error
            .as_deref()
            .map(Alert::Error)
            .or_else(|| self.success.as_deref().map(Alert::Success))
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
