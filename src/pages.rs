//! Path-to-page classification.
//!
//! One ordered table decides which dashboard section a path belongs to and
//! the title shown for it. First matching row wins.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Dashboard,
    Reservations,
    Finance,
    Providers,
    Promotions,
    Analytics,
    Login,
    NotFound,
}

impl Section {
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Reservations => "reservations",
            Self::Finance => "finance",
            Self::Providers => "providers",
            Self::Promotions => "promotions",
            Self::Analytics => "analytics",
            Self::Login => "login",
            Self::NotFound => "not-found",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub title: &'static str,
    pub section: Section,
}

impl Page {
    pub const LOGIN: Self = Self { title: "Sign in", section: Section::Login };
    pub const NOT_FOUND: Self = Self { title: "Page not found", section: Section::NotFound };
}

#[derive(Debug, Clone, Copy)]
enum Pattern {
    /// Path equals the literal.
    Exact(&'static str),
    /// Path equals the literal or continues with `/`.
    Segment(&'static str),
}

impl Pattern {
    fn matches(self, path: &str) -> bool {
        match self {
            Self::Exact(literal) => path == literal,
            Self::Segment(prefix) => path
                .strip_prefix(prefix)
                .is_some_and(|rest| rest.is_empty() || rest.starts_with('/')),
        }
    }
}

const PAGE_TABLE: &[(Pattern, Page)] = &[
    (Pattern::Exact("/"), Page { title: "Dashboard", section: Section::Dashboard }),
    (Pattern::Segment("/dashboard"), Page { title: "Dashboard", section: Section::Dashboard }),
    (Pattern::Segment("/reservations"), Page { title: "Reservations", section: Section::Reservations }),
    (Pattern::Segment("/finance"), Page { title: "Finance", section: Section::Finance }),
    (Pattern::Segment("/providers"), Page { title: "Providers", section: Section::Providers }),
    (Pattern::Segment("/promotions"), Page { title: "Promotions", section: Section::Promotions }),
    (Pattern::Segment("/analytics"), Page { title: "Analytics", section: Section::Analytics }),
];

/// Classify `path`, falling back to [`Page::NOT_FOUND`].
#[must_use]
pub fn classify(path: &str) -> Page {
    PAGE_TABLE
        .iter()
        .find(|(pattern, _)| pattern.matches(path))
        .map_or(Page::NOT_FOUND, |(_, page)| *page)
}
