//! Cookie wire format for the session token.
//!
//! Set: `name=value; Path=/; SameSite=Lax; Expires=<RFC1123>` (plus `Secure`
//! when configured). Removal rewrites the same name with an expiry in the past.

use axum_extra::extract::cookie::{Cookie, SameSite};
use time::{Duration, OffsetDateTime, PrimitiveDateTime};

/// Longest cookie lifetime browsers honour; larger requests are clamped.
pub const MAX_COOKIE_DAYS: i64 = 400;

/// Build the cookie that stores `value` under `name` for `days` days from `now`.
///
/// A `days` value of zero or less yields a cookie that is already expired.
/// Values above [`MAX_COOKIE_DAYS`] are clamped to it.
#[must_use]
pub fn session_cookie(name: &str, value: &str, days: i64, secure: bool, now: OffsetDateTime) -> Cookie<'static> {
    Cookie::build((name.to_owned(), value.to_owned()))
        .path("/")
        .same_site(SameSite::Lax)
        .secure(secure)
        .expires(expiry_after(now, days))
        .build()
}

fn expiry_after(now: OffsetDateTime, days: i64) -> OffsetDateTime {
    let days = days.clamp(0, MAX_COOKIE_DAYS);
    now.checked_add(Duration::days(days))
        .unwrap_or_else(|| PrimitiveDateTime::MAX.assume_utc())
}

/// Build the cookie that evicts `name` from the client jar.
#[must_use]
pub fn removal_cookie(name: &str, secure: bool) -> Cookie<'static> {
    Cookie::build((name.to_owned(), String::new()))
        .path("/")
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::ZERO)
        .expires(OffsetDateTime::UNIX_EPOCH)
        .build()
}

/// Render a cookie as a `Set-Cookie` header value.
#[must_use]
pub fn set_cookie_value(cookie: &Cookie<'_>) -> String {
    cookie.encoded().to_string()
}

/// Look up `name` in a `Cookie` request header (`a=1; b=2`).
///
/// Pairs are `;`-delimited with optional leading spaces. Only an exact name
/// match counts, so `token` never satisfies a lookup for `auth_token` and vice
/// versa. The value is percent-decoded; a value that fails to decode is
/// returned as written.
#[must_use]
pub fn find_cookie(header: &str, name: &str) -> Option<String> {
    header
        .split(';')
        .map(|pair| pair.trim_start_matches(' '))
        .find_map(|pair| {
            let (key, raw) = pair.split_once('=')?;
            (key == name).then(|| decode_value(pair, raw))
        })
}

fn decode_value(pair: &str, raw: &str) -> String {
    Cookie::parse_encoded(pair).map_or_else(|_| raw.to_owned(), |cookie| cookie.value().to_owned())
}

#[cfg(test)]
#[path = "cookie_test.rs"]
mod tests;
