//! Route guard.
//!
//! ARCHITECTURE
//! ============
//! Every page navigation passes through `middleware::route_guard`. Requests
//! matching `matcher::Exclusions` skip it untouched. Everything else is
//! reduced to a `NavigationRequest` (path + token presence) and handed to the
//! pure `decision::evaluate`, which allows the request or redirects it to the
//! login boundary or the application root.
//!
//! TRADE-OFFS
//! ==========
//! Token presence is the whole check. A forged or stale cookie value reaches
//! the page; anything that needs a real identity must validate the token
//! itself.

pub mod decision;
pub mod matcher;
pub mod middleware;

pub use decision::{BoundaryPaths, Decision, NavigationRequest, evaluate};
pub use matcher::Exclusions;
pub use middleware::route_guard;
