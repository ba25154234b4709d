//! Allow/redirect decision for a single navigation.
//!
//! The decision is a pure function of the requested path and whether the
//! session cookie is present. The only side effect is a `tracing` event.

/// One incoming page request, reduced to what the guard looks at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest<'a> {
    pub path: &'a str,
    pub has_token: bool,
}

/// Outcome of evaluating a [`NavigationRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    RedirectToLogin,
    RedirectToHome,
}

impl Decision {
    /// Redirect target for this decision, given the configured boundary paths.
    #[must_use]
    pub fn target<'a>(self, paths: &'a BoundaryPaths) -> Option<&'a str> {
        match self {
            Self::Allow => None,
            Self::RedirectToLogin => Some(&paths.login),
            Self::RedirectToHome => Some(&paths.home),
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Allow => "allow",
            Self::RedirectToLogin => "redirect_to_login",
            Self::RedirectToHome => "redirect_to_home",
        }
    }
}

/// The login boundary and the application root the guard redirects between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundaryPaths {
    pub login: String,
    pub home: String,
}

impl Default for BoundaryPaths {
    fn default() -> Self {
        Self { login: "/login".into(), home: "/".into() }
    }
}

/// Framework-internal or API paths the guard never redirects.
#[must_use]
pub fn is_system_path(path: &str) -> bool {
    path.starts_with("/_next") || path.contains("/api/")
}

/// Decide whether `request` proceeds or is redirected.
///
/// Rules, in order:
/// 1. the login boundary is recognised by exact path match;
/// 2. no token, not the login page, not a system path: redirect to login;
/// 3. token present on the login page: redirect home;
/// 4. anything else is allowed.
#[must_use]
pub fn evaluate(paths: &BoundaryPaths, request: &NavigationRequest<'_>) -> Decision {
    let is_login_page = request.path == paths.login;

    let decision = if !request.has_token && !is_login_page && !is_system_path(request.path) {
        Decision::RedirectToLogin
    } else if request.has_token && is_login_page {
        Decision::RedirectToHome
    } else {
        Decision::Allow
    };

    tracing::debug!(
        path = request.path,
        has_token = request.has_token,
        is_login_page,
        decision = decision.as_str(),
        "route guard evaluated"
    );
    decision
}

#[cfg(test)]
#[path = "decision_test.rs"]
mod tests;
