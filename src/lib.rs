//! Route guard and session cookie handling for the backoffice dashboard.
//!
//! Every page request passes the guard in [`guard`], which redirects between
//! the login boundary and the application based on the session cookie managed
//! by [`session`].

pub mod config;
pub mod guard;
pub mod notice;
pub mod pages;
pub mod routes;
pub mod session;
pub mod state;
