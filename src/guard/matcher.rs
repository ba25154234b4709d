//! Paths that bypass the route guard entirely.
//!
//! Static framework assets, the favicon, and PNG images are served without
//! a guard decision. Patterns are anchored regexes tested against the request
//! path; any match excludes the request.

use regex::RegexSet;

/// Built-in exclusions, checked before any configured extras.
pub const DEFAULT_EXCLUDES: &[&str] = &[r"^/_next/static", r"^/_next/image", r"^/favicon\.ico$", r"\.png$"];

/// Compiled exclusion rule set.
#[derive(Debug, Clone)]
pub struct Exclusions {
    set: RegexSet,
}

impl Exclusions {
    /// Compile the default patterns followed by `extra`.
    ///
    /// # Errors
    ///
    /// Returns an error if any extra pattern is not a valid regex.
    pub fn new(extra: &[String]) -> Result<Self, regex::Error> {
        let patterns = DEFAULT_EXCLUDES
            .iter()
            .copied()
            .chain(extra.iter().map(String::as_str));
        Ok(Self { set: RegexSet::new(patterns)? })
    }

    /// Whether `path` skips the guard.
    #[must_use]
    pub fn is_excluded(&self, path: &str) -> bool {
        self.set.is_match(path)
    }

    #[must_use]
    pub fn patterns(&self) -> &[String] {
        self.set.patterns()
    }
}

#[cfg(test)]
#[path = "matcher_test.rs"]
mod tests;
