//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into the guard middleware and handlers via the
//! `State` extractor. It is read-only after startup: the typed config and the
//! compiled exclusion set. Session state lives in the client's cookie jar, not
//! here.

use std::sync::Arc;

use crate::config::{ConfigError, GateConfig};
use crate::guard::Exclusions;

/// Clone is required by Axum; inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<GateConfig>,
    pub exclusions: Arc<Exclusions>,
}

impl AppState {
    /// Compile the guard exclusions and wrap `config` for sharing.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` fails [`GateConfig::validate`].
    pub fn new(config: GateConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let exclusions =
            Exclusions::new(&config.extra_excludes).map_err(|e| ConfigError::InvalidPattern(e.to_string()))?;
        Ok(Self { config: Arc::new(config), exclusions: Arc::new(exclusions) })
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
