//! Shared application state for request handlers.

use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Holds the configuration resolved at startup. Nothing in here is mutated
/// after the router is built.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Creates a new application state from the resolved configuration.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}
