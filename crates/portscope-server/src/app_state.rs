//! Shared application state for the portscope server.
//!
//! Builds the environment options from config once at startup, then hands out
//! cheap clones to request handlers.

use std::sync::Arc;

use portscope_core::error::{PortScopeError, Result};
use portscope_core::{EnvironmentOptions, PortRangePolicyStore};

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    options: Arc<EnvironmentOptions>,
}

impl AppState {
    /// Build application state, applying configured port ranges to a fresh store.
    /// Returns Result so main can report errors without panicking.
    pub fn new(cfg: &ServerConfig) -> Result<Self> {
        let mut store = PortRangePolicyStore::new();
        for entry in &cfg.port_ranges {
            store
                .set_range(entry.scope, entry.protocol, entry.min, entry.max)
                .map_err(|e| {
                    PortScopeError::InvalidArgument(format!(
                        "preload failed ({}): {e}",
                        entry.key()
                    ))
                })?;
        }
        tracing::info!(count = store.len(), "preloaded port ranges");

        Ok(Self {
            options: Arc::new(EnvironmentOptions::from_store(store)),
        })
    }

    pub fn options(&self) -> Arc<EnvironmentOptions> {
        Arc::clone(&self.options)
    }
}
