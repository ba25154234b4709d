//! Session token storage.
//!
//! DESIGN
//! ======
//! The session token is a single opaque cookie. Its presence is the only
//! authentication signal; the value is never inspected, and the cookie's own
//! expiry is the only lifetime enforced.
//!
//! `cookie` owns the wire format (build, expire, scan) and `store` models the
//! client-side jar that holds the cookie between requests. Both read values
//! back through the same `find_cookie` scan the route guard uses.

pub mod cookie;
pub mod store;

pub use cookie::find_cookie;
pub use store::SessionStore;

/// Cookie name used when configuration does not override it.
pub const DEFAULT_TOKEN_COOKIE: &str = "auth_token";

/// Lifetime of a freshly set token cookie, in days.
pub const DEFAULT_TOKEN_DAYS: i64 = 1;
