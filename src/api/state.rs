//! Application state for the NZ pay engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::JurisdictionConfig;

/// Shared application state.
///
/// Holds the jurisdiction configuration, loaded once at startup and shared
/// read-only by every handler.
#[derive(Clone)]
pub struct AppState {
    config: Arc<JurisdictionConfig>,
}

impl AppState {
    /// Creates a new application state with the given configuration.
    pub fn new(config: JurisdictionConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the jurisdiction configuration.
    pub fn config(&self) -> &JurisdictionConfig {
        &self.config
    }
}
