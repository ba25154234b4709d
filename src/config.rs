//! Gate configuration parsed from environment variables.

use std::path::PathBuf;

use crate::guard::decision::is_system_path;
use crate::guard::{BoundaryPaths, Exclusions};
use crate::session::cookie::MAX_COOKIE_DAYS;
use crate::session::{DEFAULT_TOKEN_COOKIE, DEFAULT_TOKEN_DAYS};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_ASSET_DIR: &str = "./public";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be a number, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },
    #[error("{key} must be one of 1/true/yes/on or 0/false/no/off, got {value:?}")]
    InvalidBool { key: &'static str, value: String },
    #[error("{key} must start with '/', got {value:?}")]
    InvalidPath { key: &'static str, value: String },
    #[error("AUTH_COOKIE_NAME must be non-empty and contain no '=', ';' or whitespace")]
    InvalidCookieName,
    #[error("AUTH_COOKIE_DAYS must be between 1 and {MAX_COOKIE_DAYS}, got {0}")]
    CookieDaysOutOfRange(i64),
    #[error("{key} must not contain route syntax ('{{', '}}', '*', ':'), got {value:?}")]
    RouteSyntax { key: &'static str, value: String },
    #[error("LOGIN_PATH and HOME_PATH must differ, both are {0:?}")]
    LoginIsHome(String),
    #[error("LOGIN_PATH {0:?} is an API, framework, or excluded asset path")]
    ReservedLoginPath(String),
    #[error("invalid GUARD_EXTRA_EXCLUDES pattern: {0}")]
    InvalidPattern(String),
}

/// Session cookie settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieSettings {
    pub name: String,
    pub days: i64,
    pub secure: bool,
}

impl Default for CookieSettings {
    fn default() -> Self {
        Self { name: DEFAULT_TOKEN_COOKIE.into(), days: DEFAULT_TOKEN_DAYS, secure: false }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateConfig {
    pub port: u16,
    pub cookie: CookieSettings,
    pub paths: BoundaryPaths,
    pub extra_excludes: Vec<String>,
    pub asset_dir: PathBuf,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            cookie: CookieSettings::default(),
            paths: BoundaryPaths::default(),
            extra_excludes: Vec::new(),
            asset_dir: PathBuf::from(DEFAULT_ASSET_DIR),
        }
    }
}

impl GateConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `AUTH_COOKIE_NAME`: default `auth_token`
    /// - `AUTH_COOKIE_DAYS`: default 1, at most 400
    /// - `COOKIE_SECURE`: default false
    /// - `LOGIN_PATH`: default `/login`
    /// - `HOME_PATH`: default `/`
    /// - `GUARD_EXTRA_EXCLUDES`: comma-separated regexes
    /// - `ASSET_DIR`: default `./public`
    ///
    /// # Errors
    ///
    /// Returns an error if any variable is set to an unparseable value, or if
    /// the result fails [`GateConfig::validate`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`GateConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = parse_number(&lookup, "PORT")?.unwrap_or(defaults.port);
        let name = lookup("AUTH_COOKIE_NAME").unwrap_or(defaults.cookie.name);
        if !valid_cookie_name(&name) {
            return Err(ConfigError::InvalidCookieName);
        }
        let cookie = CookieSettings {
            name,
            days: parse_number(&lookup, "AUTH_COOKIE_DAYS")?.unwrap_or(defaults.cookie.days),
            secure: parse_bool(&lookup, "COOKIE_SECURE")?.unwrap_or(defaults.cookie.secure),
        };
        let paths = BoundaryPaths {
            login: parse_path(&lookup, "LOGIN_PATH")?.unwrap_or(defaults.paths.login),
            home: parse_path(&lookup, "HOME_PATH")?.unwrap_or(defaults.paths.home),
        };
        let extra_excludes = lookup("GUARD_EXTRA_EXCLUDES")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .map(str::to_owned)
                    .collect()
            })
            .unwrap_or_default();
        let asset_dir = lookup("ASSET_DIR").map_or(defaults.asset_dir, PathBuf::from);

        let config = Self { port, cookie, paths, extra_excludes, asset_dir };
        config.validate()?;
        Ok(config)
    }

    /// Check the cross-field rules the router and guard rely on.
    ///
    /// The login path is mounted as its own route and must be reachable by
    /// the guard, so it may not collide with home, the API namespace,
    /// framework paths, or any exclusion.
    ///
    /// # Errors
    ///
    /// Returns the first rule that fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_COOKIE_DAYS).contains(&self.cookie.days) {
            return Err(ConfigError::CookieDaysOutOfRange(self.cookie.days));
        }

        let login = &self.paths.login;
        if has_route_syntax(login) {
            return Err(ConfigError::RouteSyntax { key: "LOGIN_PATH", value: login.clone() });
        }
        if *login == self.paths.home {
            return Err(ConfigError::LoginIsHome(login.clone()));
        }

        let exclusions =
            Exclusions::new(&self.extra_excludes).map_err(|e| ConfigError::InvalidPattern(e.to_string()))?;
        if is_system_path(login) || exclusions.is_excluded(login) {
            return Err(ConfigError::ReservedLoginPath(login.clone()));
        }
        Ok(())
    }
}

fn has_route_syntax(path: &str) -> bool {
    path.contains(['{', '}', '*', ':'])
}

pub(crate) fn parse_bool_value(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_bool(lookup: &impl Fn(&str) -> Option<String>, key: &'static str) -> Result<Option<bool>, ConfigError> {
    lookup(key)
        .map(|value| parse_bool_value(&value).ok_or(ConfigError::InvalidBool { key, value }))
        .transpose()
}

fn parse_number<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError> {
    lookup(key)
        .map(|value| value.trim().parse::<T>().map_err(|_| ConfigError::InvalidNumber { key, value }))
        .transpose()
}

fn parse_path(lookup: &impl Fn(&str) -> Option<String>, key: &'static str) -> Result<Option<String>, ConfigError> {
    lookup(key)
        .map(|value| {
            if value.starts_with('/') {
                Ok(value)
            } else {
                Err(ConfigError::InvalidPath { key, value })
            }
        })
        .transpose()
}

fn valid_cookie_name(name: &str) -> bool {
    !name.is_empty() && !name.chars().any(|c| c == '=' || c == ';' || c.is_whitespace())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
