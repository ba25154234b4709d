//! Client-side cookie jar holding the session token.
//!
//! DESIGN
//! ======
//! `SessionStore` behaves like the browser jar the dashboard runs in: writes
//! replace any cookie of the same name, and cookies whose expiry has passed
//! are evicted. Reads go through the rendered `Cookie` header so the store and
//! the route guard agree on what "present" means.
//!
//! The store never reports errors. A missing or unreadable cookie is `None`.

use axum_extra::extract::cookie::Cookie;
use time::OffsetDateTime;

use super::cookie::{find_cookie, removal_cookie, session_cookie};

/// In-memory cookie jar keyed by cookie name.
pub struct SessionStore {
    cookies: Vec<Cookie<'static>>,
    secure: bool,
    clock: fn() -> OffsetDateTime,
}

impl SessionStore {
    #[must_use]
    pub fn new(secure: bool) -> Self {
        Self::with_clock(secure, OffsetDateTime::now_utc)
    }

    /// Build a store that reads the current time from `clock`.
    #[must_use]
    pub fn with_clock(secure: bool, clock: fn() -> OffsetDateTime) -> Self {
        Self { cookies: Vec::new(), secure, clock }
    }

    /// Store `value` under `name`, expiring `days` days from now.
    pub fn set(&mut self, name: &str, value: &str, days: i64) {
        let cookie = session_cookie(name, value, days, self.secure, (self.clock)());
        self.accept(cookie);
    }

    /// Read the value stored under `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<String> {
        find_cookie(&self.cookie_header(), name)
    }

    /// Expire `name` so later reads see nothing.
    pub fn delete(&mut self, name: &str) {
        self.accept(removal_cookie(name, self.secure));
    }

    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Apply a `Set-Cookie` header value received from the server.
    ///
    /// Unparseable values are dropped.
    pub fn accept_set_cookie(&mut self, header: &str) {
        if let Ok(cookie) = Cookie::parse_encoded(header.to_owned()) {
            self.accept(cookie);
        }
    }

    /// Render the `Cookie` request header for every live cookie.
    #[must_use]
    pub fn cookie_header(&self) -> String {
        let now = (self.clock)();
        self.cookies
            .iter()
            .filter(|cookie| is_live(cookie, now))
            .map(|cookie| cookie.stripped().encoded().to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn accept(&mut self, cookie: Cookie<'static>) {
        match self.cookies.iter_mut().find(|existing| existing.name() == cookie.name()) {
            Some(existing) => *existing = cookie,
            None => self.cookies.push(cookie),
        }
        let now = (self.clock)();
        self.cookies.retain(|cookie| is_live(cookie, now));
    }
}

fn is_live(cookie: &Cookie<'_>, now: OffsetDateTime) -> bool {
    if cookie.max_age().is_some_and(|age| age.is_zero() || age.is_negative()) {
        return false;
    }
    cookie.expires_datetime().is_none_or(|expires| expires > now)
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
